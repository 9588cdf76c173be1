//! Type descriptions and erasure.
//!
//! A [`TypeDescription`] is either an erased (raw) type or one of the
//! generic forms a signature can produce. Every form normalizes to an
//! [`ErasedType`] through [`TypeDescription::as_erasure`], which is the only
//! identity used when asking "is this the same declaring type?".

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Binary name of `java.lang.Object`, the erasure of unbounded variables.
const OBJECT: &str = "java.lang.Object";

/// Raw, non-generic identity of a type.
///
/// Equality is by binary name. Clones share the name allocation, so
/// comparing a type against its own clone is a pointer check.
#[derive(Clone, Debug, Eq)]
pub struct ErasedType {
    name: Arc<str>,
}

impl ErasedType {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self { name: name.into() }
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::new(OBJECT)
    }

    /// Binary name in source notation, e.g. `java.util.Map.Entry`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Array type with this type as its component.
    #[must_use]
    pub fn array_of(&self) -> Self {
        Self::new(format!("{}[]", self.name))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.name.ends_with("[]")
    }

    /// The non-generic view of this type.
    pub fn as_generic_type(&self) -> TypeDescription {
        TypeDescription::Erased(self.clone())
    }
}

impl PartialEq for ErasedType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name) || self.name == other.name
    }
}

impl Hash for ErasedType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for ErasedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Which form a [`TypeDescription`] takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeSort {
    /// A raw type with no type arguments.
    NonGeneric,
    /// A type applied to type arguments, `List<String>`.
    Parameterized,
    /// A type variable, `T`.
    Variable,
    /// An array whose component is generic, `T[]`.
    GenericArray,
    /// A wildcard argument, `? extends Number`.
    Wildcard,
}

impl TypeSort {
    /// Whether a type of this sort is its own erasure.
    #[inline]
    pub const fn is_non_generic(self) -> bool {
        matches!(self, TypeSort::NonGeneric)
    }
}

/// A type as it appears in a signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescription {
    /// Raw type.
    Erased(ErasedType),
    /// Generic type applied to arguments.
    Parameterized {
        erasure: ErasedType,
        arguments: Vec<TypeDescription>,
        /// Enclosing parameterization for inner classes of generic types.
        owner: Option<Box<TypeDescription>>,
    },
    /// Type variable with its declared bounds.
    ///
    /// An empty bound list means the implicit bound `java.lang.Object`.
    Variable {
        symbol: Arc<str>,
        bounds: Vec<TypeDescription>,
    },
    /// Array of a generic component.
    GenericArray { component: Box<TypeDescription> },
    /// Wildcard with an optional upper bound.
    Wildcard { upper: Option<Box<TypeDescription>> },
}

impl TypeDescription {
    /// Raw type by binary name.
    pub fn erased(name: impl Into<Arc<str>>) -> Self {
        TypeDescription::Erased(ErasedType::new(name))
    }

    pub fn parameterized(erasure: ErasedType, arguments: Vec<TypeDescription>) -> Self {
        TypeDescription::Parameterized {
            erasure,
            arguments,
            owner: None,
        }
    }

    pub fn variable(symbol: impl Into<Arc<str>>, bounds: Vec<TypeDescription>) -> Self {
        TypeDescription::Variable {
            symbol: symbol.into(),
            bounds,
        }
    }

    pub fn generic_array(component: TypeDescription) -> Self {
        TypeDescription::GenericArray {
            component: Box::new(component),
        }
    }

    pub fn wildcard(upper: Option<TypeDescription>) -> Self {
        TypeDescription::Wildcard {
            upper: upper.map(Box::new),
        }
    }

    pub fn sort(&self) -> TypeSort {
        match self {
            TypeDescription::Erased(_) => TypeSort::NonGeneric,
            TypeDescription::Parameterized { .. } => TypeSort::Parameterized,
            TypeDescription::Variable { .. } => TypeSort::Variable,
            TypeDescription::GenericArray { .. } => TypeSort::GenericArray,
            TypeDescription::Wildcard { .. } => TypeSort::Wildcard,
        }
    }

    /// Normalize to the raw type.
    ///
    /// Variables and wildcards erase to their (first) upper bound, or to
    /// `java.lang.Object` when unbounded.
    pub fn as_erasure(&self) -> ErasedType {
        match self {
            TypeDescription::Erased(erased) | TypeDescription::Parameterized { erasure: erased, .. } => {
                erased.clone()
            }
            TypeDescription::Variable { bounds, .. } => bounds
                .first()
                .map_or_else(ErasedType::object, TypeDescription::as_erasure),
            TypeDescription::GenericArray { component } => component.as_erasure().array_of(),
            TypeDescription::Wildcard { upper } => upper
                .as_deref()
                .map_or_else(ErasedType::object, TypeDescription::as_erasure),
        }
    }

    /// Whether this type erases to `erased`.
    pub fn represents(&self, erased: &ErasedType) -> bool {
        self.as_erasure() == *erased
    }
}

impl From<ErasedType> for TypeDescription {
    fn from(erased: ErasedType) -> Self {
        TypeDescription::Erased(erased)
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescription::Erased(erased) => write!(f, "{erased}"),
            TypeDescription::Parameterized {
                erasure,
                arguments,
                owner,
            } => {
                if let Some(owner) = owner {
                    let simple = erasure
                        .name()
                        .rsplit(['$', '.'])
                        .next()
                        .unwrap_or(erasure.name());
                    write!(f, "{owner}.{simple}<")?;
                } else {
                    write!(f, "{erasure}<")?;
                }
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(">")
            }
            TypeDescription::Variable { symbol, .. } => f.write_str(symbol),
            TypeDescription::GenericArray { component } => write!(f, "{component}[]"),
            TypeDescription::Wildcard { upper: None } => f.write_str("?"),
            TypeDescription::Wildcard { upper: Some(upper) } => write!(f, "? extends {upper}"),
        }
    }
}

#[cfg(test)]
mod tests;
