//! Errors raised while assembling a matcher.
//!
//! Evaluation itself never fails; only construction does.

use crate::inline::FilterRole;

/// Coarse classification of a [`MatcherError`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// The filters handed to the factory do not describe a usable policy.
    InvalidConfiguration,
}

/// Matcher construction error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// A filter role was never supplied.
    #[error("no {role} methods filter was supplied")]
    MissingFilter { role: FilterRole },
    /// A filter configuration could not be turned into a filter.
    #[error("invalid {role} methods filter: {reason}")]
    InvalidConfiguration { role: FilterRole, reason: String },
}

impl MatcherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatcherError::MissingFilter { .. } | MatcherError::InvalidConfiguration { .. } => {
                ErrorKind::InvalidConfiguration
            }
        }
    }

    /// The filter role the error is about.
    pub fn role(&self) -> FilterRole {
        match self {
            MatcherError::MissingFilter { role } | MatcherError::InvalidConfiguration { role, .. } => {
                *role
            }
        }
    }
}
