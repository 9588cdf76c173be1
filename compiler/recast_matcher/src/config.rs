//! Filter configuration.
//!
//! Lets the two factory policies be described as data, e.g. in a build
//! plugin's settings file:
//!
//! ```json
//! {
//!   "ignored": { "kind": "any_of", "filters": [
//!     { "kind": "synthetic" },
//!     { "kind": "default_finalizer" }
//!   ]},
//!   "predefined": { "kind": "name_prefix", "prefix": "get" }
//! }
//! ```

use recast_desc::{ErasedType, Modifiers};
use serde::{Deserialize, Serialize};

use crate::error::MatcherError;
use crate::filter::{self, FilterExt, SharedFilter};
use crate::inline::FilterRole;

/// A filter described as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterConfig {
    Any,
    None,
    Named {
        name: String,
    },
    NamePrefix {
        prefix: String,
    },
    /// Methods carrying every listed modifier keyword.
    Modifiers {
        all: Vec<String>,
    },
    Synthetic,
    Bridge,
    Constructor,
    DefaultFinalizer,
    DeclaredBy {
        #[serde(rename = "type")]
        type_name: String,
    },
    Not {
        filter: Box<FilterConfig>,
    },
    /// Matches if any member matches; empty matches nothing.
    AnyOf {
        filters: Vec<FilterConfig>,
    },
    /// Matches if every member matches; empty matches everything.
    AllOf {
        filters: Vec<FilterConfig>,
    },
}

impl FilterConfig {
    /// Turn the description into a filter for `role`.
    pub fn build(&self, role: FilterRole) -> Result<SharedFilter, MatcherError> {
        let built = match self {
            FilterConfig::Any => filter::any().shared(),
            FilterConfig::None => filter::none().shared(),
            FilterConfig::Named { name } => filter::named(name).shared(),
            FilterConfig::NamePrefix { prefix } => filter::name_starts_with(prefix).shared(),
            FilterConfig::Modifiers { all } => {
                filter::has_modifiers(parse_modifiers(all, role)?).shared()
            }
            FilterConfig::Synthetic => filter::is_synthetic().shared(),
            FilterConfig::Bridge => filter::is_bridge().shared(),
            FilterConfig::Constructor => filter::is_constructor().shared(),
            FilterConfig::DefaultFinalizer => filter::is_default_finalizer().shared(),
            FilterConfig::DeclaredBy { type_name } => {
                if type_name.is_empty() {
                    return Err(MatcherError::InvalidConfiguration {
                        role,
                        reason: "declared_by needs a type name".to_owned(),
                    });
                }
                filter::is_declared_by(ErasedType::new(type_name.as_str())).shared()
            }
            FilterConfig::Not { filter: inner } => inner.build(role)?.not().shared(),
            FilterConfig::AnyOf { filters } => {
                let mut acc = filter::none().shared();
                for member in filters {
                    acc = acc.or(member.build(role)?).shared();
                }
                acc
            }
            FilterConfig::AllOf { filters } => {
                let mut acc = filter::any().shared();
                for member in filters {
                    acc = acc.and(member.build(role)?).shared();
                }
                acc
            }
        };
        Ok(built)
    }
}

fn parse_modifiers(keywords: &[String], role: FilterRole) -> Result<Modifiers, MatcherError> {
    keywords.iter().try_fold(Modifiers::empty(), |acc, keyword| {
        Modifiers::from_keyword(keyword)
            .map(|flag| acc | flag)
            .ok_or_else(|| MatcherError::InvalidConfiguration {
                role,
                reason: format!("unknown modifier `{keyword}`"),
            })
    })
}

/// Both factory policies. A missing entry is a configuration error, never
/// a silent default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    pub ignored: Option<FilterConfig>,
    pub predefined: Option<FilterConfig>,
}
