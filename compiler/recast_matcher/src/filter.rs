//! Method filters.
//!
//! A filter is one yes/no question about a method. The factory takes two of
//! them; everything else here is stock policies and combinators for building
//! those two.

use std::fmt;
use std::sync::Arc;

use recast_desc::{ErasedType, MethodDescriptor, MethodKind, Modifiers};

/// A policy deciding whether a method belongs to some set.
pub trait MethodFilter: Send + Sync {
    fn matches(&self, method: &dyn MethodDescriptor) -> bool;
}

/// A filter shared between factories and the predicates they resolve.
pub type SharedFilter = Arc<dyn MethodFilter>;

impl<T: MethodFilter + ?Sized> MethodFilter for Arc<T> {
    #[inline]
    fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        (**self).matches(method)
    }
}

impl<T: MethodFilter + ?Sized> MethodFilter for Box<T> {
    #[inline]
    fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        (**self).matches(method)
    }
}

/// Filter backed by a closure. Created by [`from_fn`].
#[derive(Clone)]
pub struct FnFilter<F>(F);

impl<F> MethodFilter for FnFilter<F>
where
    F: Fn(&dyn MethodDescriptor) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        (self.0)(method)
    }
}

impl<F> fmt::Debug for FnFilter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFilter")
    }
}

/// Wrap a closure as a filter.
pub fn from_fn<F>(f: F) -> FnFilter<F>
where
    F: Fn(&dyn MethodDescriptor) -> bool + Send + Sync,
{
    FnFilter(f)
}

/// Filter accepting `a` or `b`. Created by [`FilterExt::or`].
#[derive(Clone, Debug)]
pub struct Or<A, B>(A, B);

/// Filter accepting `a` and `b`. Created by [`FilterExt::and`].
#[derive(Clone, Debug)]
pub struct And<A, B>(A, B);

/// Negated filter. Created by [`FilterExt::not`].
#[derive(Clone, Debug)]
pub struct Not<A>(A);

impl<A: MethodFilter, B: MethodFilter> MethodFilter for Or<A, B> {
    fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        self.0.matches(method) || self.1.matches(method)
    }
}

impl<A: MethodFilter, B: MethodFilter> MethodFilter for And<A, B> {
    fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        self.0.matches(method) && self.1.matches(method)
    }
}

impl<A: MethodFilter> MethodFilter for Not<A> {
    fn matches(&self, method: &dyn MethodDescriptor) -> bool {
        !self.0.matches(method)
    }
}

/// Combinators available on every sized filter.
pub trait FilterExt: MethodFilter + Sized {
    #[must_use]
    fn or<B: MethodFilter>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    #[must_use]
    fn and<B: MethodFilter>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    #[must_use]
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type so the filter can be handed to a factory.
    fn shared(self) -> SharedFilter
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: MethodFilter> FilterExt for T {}

/// Accepts every method.
pub fn any() -> impl MethodFilter + Clone {
    from_fn(|_| true)
}

/// Accepts no method.
pub fn none() -> impl MethodFilter + Clone {
    from_fn(|_| false)
}

/// Methods with exactly this internal name.
pub fn named(name: &str) -> impl MethodFilter + Clone {
    let name: Arc<str> = Arc::from(name);
    from_fn(move |method| method.name() == &*name)
}

/// Methods whose internal name starts with `prefix`.
pub fn name_starts_with(prefix: &str) -> impl MethodFilter + Clone {
    let prefix: Arc<str> = Arc::from(prefix);
    from_fn(move |method| method.name().starts_with(&*prefix))
}

/// Methods carrying every modifier in `modifiers`.
pub fn has_modifiers(modifiers: Modifiers) -> impl MethodFilter + Clone {
    from_fn(move |method| method.modifiers().contains(modifiers))
}

pub fn is_synthetic() -> impl MethodFilter + Clone {
    from_fn(|method| method.modifiers().is_synthetic())
}

pub fn is_bridge() -> impl MethodFilter + Clone {
    from_fn(|method| method.modifiers().is_bridge())
}

pub fn is_constructor() -> impl MethodFilter + Clone {
    from_fn(|method| method.kind() == MethodKind::Constructor)
}

/// `java.lang.Object#finalize()`, the finalizer every class inherits.
pub fn is_default_finalizer() -> impl MethodFilter + Clone {
    from_fn(|method| {
        method.name() == "finalize"
            && method.parameter_count() == 0
            && method.declaring_type().represents(&ErasedType::object())
    })
}

/// Methods whose declaring type erases to `erased`.
pub fn is_declared_by(erased: ErasedType) -> impl MethodFilter + Clone {
    from_fn(move |method| method.declaring_type().represents(&erased))
}

/// The usual "ignored methods" policy: compiler-generated methods and the
/// inherited default finalizer.
pub fn default_ignored() -> impl MethodFilter + Clone {
    is_synthetic().or(is_default_finalizer())
}
