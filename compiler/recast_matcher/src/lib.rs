//! Method selection for inline type redefinition.
//!
//! When a type is redefined in place, every method reachable on it is
//! either handed to instrumentation or left untouched. [`MatcherFactory`]
//! holds the caller's two policies ("ignored" and "predefined" methods) and
//! resolves them against a target type into an [`InlineMethodPredicate`].
//!
//! # Selection rule
//!
//! - predefined methods are never selected
//! - methods declared on the target (by erasure) are always selected
//! - inherited methods are selected only if virtual, not final and not ignored

mod config;
mod error;
pub mod filter;
mod inline;

pub use config::{FilterConfig, MatcherConfig};
pub use error::{ErrorKind, MatcherError};
pub use filter::{FilterExt, MethodFilter, SharedFilter};
pub use inline::{
    Decision, FilterRole, InlineMethodPredicate, MatcherFactory, MatcherFactoryBuilder,
};
