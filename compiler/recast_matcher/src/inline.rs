//! Method selection for one inline redefinition.
//!
//! [`MatcherFactory`] is built once per redefinition session and resolved
//! once per target type. The resolved [`InlineMethodPredicate`] is then asked
//! about every method of the target's hierarchy.

use std::fmt;
use std::sync::Arc;

use recast_desc::{ErasedType, MethodDescriptor, TypeDescription};

use crate::config::MatcherConfig;
use crate::error::MatcherError;
use crate::filter::{MethodFilter, SharedFilter};

/// Which of the two factory filters something refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FilterRole {
    /// Inherited methods the caller never wants touched.
    Ignored,
    /// Methods the caller already implements through another mechanism.
    Predefined,
}

impl fmt::Display for FilterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterRole::Ignored => f.write_str("ignored"),
            FilterRole::Predefined => f.write_str("predefined"),
        }
    }
}

/// Holds the ignored and predefined policies of a redefinition session.
#[derive(Clone)]
pub struct MatcherFactory {
    ignored: SharedFilter,
    predefined: SharedFilter,
}

impl MatcherFactory {
    pub fn new(
        ignored: impl MethodFilter + 'static,
        predefined: impl MethodFilter + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(ignored), Arc::new(predefined))
    }

    fn from_shared(ignored: SharedFilter, predefined: SharedFilter) -> Self {
        Self {
            ignored,
            predefined,
        }
    }

    pub fn builder() -> MatcherFactoryBuilder {
        MatcherFactoryBuilder::default()
    }

    /// Build both filters from configuration. Both entries are required.
    pub fn from_config(config: &MatcherConfig) -> Result<Self, MatcherError> {
        let ignored = config
            .ignored
            .as_ref()
            .ok_or(MatcherError::MissingFilter {
                role: FilterRole::Ignored,
            })?
            .build(FilterRole::Ignored)?;
        let predefined = config
            .predefined
            .as_ref()
            .ok_or(MatcherError::MissingFilter {
                role: FilterRole::Predefined,
            })?
            .build(FilterRole::Predefined)?;
        Ok(Self::from_shared(ignored, predefined))
    }

    /// Bind the policies to `target`.
    ///
    /// The target is erased here, so a parameterized and a raw description
    /// of the same type resolve to equivalent predicates.
    #[tracing::instrument(level = "debug", skip_all, fields(target_type = %target))]
    pub fn resolve(&self, target: &TypeDescription) -> InlineMethodPredicate {
        let erasure = target.as_erasure();
        tracing::debug!(%erasure, sort = ?target.sort(), "resolved inline method predicate");
        InlineMethodPredicate {
            target: erasure,
            ignored: SharedFilter::clone(&self.ignored),
            predefined: SharedFilter::clone(&self.predefined),
        }
    }
}

/// Two factories are equal when they share the same filter instances.
impl PartialEq for MatcherFactory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ignored, &other.ignored)
            && Arc::ptr_eq(&self.predefined, &other.predefined)
    }
}

impl Eq for MatcherFactory {}

impl fmt::Debug for MatcherFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherFactory").finish_non_exhaustive()
    }
}

/// Collects the two filters; both must be set before [`build`](Self::build).
#[derive(Default)]
pub struct MatcherFactoryBuilder {
    ignored: Option<SharedFilter>,
    predefined: Option<SharedFilter>,
}

impl MatcherFactoryBuilder {
    #[must_use]
    pub fn ignored(mut self, filter: impl MethodFilter + 'static) -> Self {
        self.ignored = Some(Arc::new(filter));
        self
    }

    #[must_use]
    pub fn predefined(mut self, filter: impl MethodFilter + 'static) -> Self {
        self.predefined = Some(Arc::new(filter));
        self
    }

    pub fn build(self) -> Result<MatcherFactory, MatcherError> {
        let ignored = self.ignored.ok_or(MatcherError::MissingFilter {
            role: FilterRole::Ignored,
        })?;
        let predefined = self.predefined.ok_or(MatcherError::MissingFilter {
            role: FilterRole::Predefined,
        })?;
        Ok(MatcherFactory::from_shared(ignored, predefined))
    }
}

/// Why a method was or was not selected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decision {
    /// Handled elsewhere; never selected.
    Predefined,
    /// Declared on the target itself; selected.
    DeclaredOnTarget,
    /// Inherited and safe to override; selected.
    Overridable,
    /// Inherited but not virtual.
    NotVirtual,
    /// Inherited and carries the final modifier.
    Final,
    /// Inherited and excluded by the ignored policy.
    Ignored,
}

impl Decision {
    #[inline]
    pub const fn is_selected(self) -> bool {
        matches!(self, Decision::DeclaredOnTarget | Decision::Overridable)
    }
}

/// The selection rule bound to one target type.
#[derive(Clone)]
pub struct InlineMethodPredicate {
    target: ErasedType,
    ignored: SharedFilter,
    predefined: SharedFilter,
}

impl InlineMethodPredicate {
    /// Erasure of the type this predicate was resolved against.
    pub fn target(&self) -> &ErasedType {
        &self.target
    }

    /// Whether `method` should receive new instrumentation.
    #[inline]
    pub fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        self.classify(method).is_selected()
    }

    /// Classify `method`, stopping at the first deciding condition.
    ///
    /// `is_virtual` and the final modifier are checked separately; a method
    /// reported virtual but flagged final is still rejected.
    pub fn classify(&self, method: &dyn MethodDescriptor) -> Decision {
        let decision = if self.predefined.matches(method) {
            Decision::Predefined
        } else if method.declaring_type().represents(&self.target) {
            Decision::DeclaredOnTarget
        } else if !method.is_virtual() {
            Decision::NotVirtual
        } else if method.modifiers().is_final() {
            Decision::Final
        } else if self.ignored.matches(method) {
            Decision::Ignored
        } else {
            Decision::Overridable
        };
        tracing::trace!(
            target_type = %self.target,
            method = method.name(),
            declared_by = %method.declaring_type(),
            ?decision,
            "classified method"
        );
        decision
    }

    /// The methods of `methods` that should be instrumented, in input order.
    pub fn select<'a, M, I>(&self, methods: I) -> Vec<&'a M>
    where
        M: MethodDescriptor + 'a,
        I: IntoIterator<Item = &'a M>,
    {
        let mut considered = 0usize;
        let selected: Vec<&'a M> = methods
            .into_iter()
            .inspect(|_| considered += 1)
            .filter(|method| self.matches(*method))
            .collect();
        tracing::debug!(
            target_type = %self.target,
            considered,
            selected = selected.len(),
            "selected methods for inline redefinition"
        );
        selected
    }
}

/// Equal when resolved against the same erasure with the same filter instances.
impl PartialEq for InlineMethodPredicate {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && Arc::ptr_eq(&self.ignored, &other.ignored)
            && Arc::ptr_eq(&self.predefined, &other.predefined)
    }
}

impl Eq for InlineMethodPredicate {}

impl fmt::Debug for InlineMethodPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineMethodPredicate")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
