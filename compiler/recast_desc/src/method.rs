//! Method descriptions.
//!
//! [`MethodDescriptor`] is the query surface method selection reads.
//! [`MethodDescription`] is the owned implementation used by the
//! redefinition pipeline when it lists a type's hierarchy.

use std::fmt;
use std::sync::Arc;

use crate::{Modifiers, TypeDescription};

/// What kind of code a method description stands for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum MethodKind {
    /// An ordinary method.
    #[default]
    Method,
    /// An instance initializer (`<init>`).
    Constructor,
    /// A static initializer (`<clinit>`).
    TypeInitializer,
}

/// Read-only view of a method.
///
/// `is_virtual` has a default derived from kind and modifiers, but an
/// implementation may answer it from its own metadata. Callers that care
/// about finality must still test [`Modifiers::FINAL`] themselves.
pub trait MethodDescriptor: Send + Sync {
    /// Internal name, `<init>` for constructors.
    fn name(&self) -> &str;

    fn modifiers(&self) -> Modifiers;

    /// The type that declares this method, possibly in generic form.
    fn declaring_type(&self) -> &TypeDescription;

    fn parameter_count(&self) -> usize;

    fn kind(&self) -> MethodKind;

    /// Whether the method can be overridden: an ordinary method that is
    /// neither static, private nor final.
    fn is_virtual(&self) -> bool {
        let modifiers = self.modifiers();
        self.kind() == MethodKind::Method
            && !modifiers.intersects(Modifiers::STATIC | Modifiers::PRIVATE | Modifiers::FINAL)
    }
}

/// Owned method description.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodDescription {
    name: Arc<str>,
    declaring_type: TypeDescription,
    modifiers: Modifiers,
    parameter_count: usize,
    kind: MethodKind,
}

impl MethodDescription {
    /// Name of every constructor in the class file.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";
    /// Name of the static initializer in the class file.
    pub const TYPE_INITIALIZER_NAME: &'static str = "<clinit>";

    /// A public, parameterless, ordinary method.
    pub fn new(name: impl Into<Arc<str>>, declaring_type: impl Into<TypeDescription>) -> Self {
        Self {
            name: name.into(),
            declaring_type: declaring_type.into(),
            modifiers: Modifiers::PUBLIC,
            parameter_count: 0,
            kind: MethodKind::Method,
        }
    }

    /// A public, parameterless constructor.
    pub fn constructor(declaring_type: impl Into<TypeDescription>) -> Self {
        Self {
            kind: MethodKind::Constructor,
            ..Self::new(Self::CONSTRUCTOR_NAME, declaring_type)
        }
    }

    /// The static initializer of `declaring_type`.
    pub fn type_initializer(declaring_type: impl Into<TypeDescription>) -> Self {
        Self {
            kind: MethodKind::TypeInitializer,
            modifiers: Modifiers::STATIC,
            ..Self::new(Self::TYPE_INITIALIZER_NAME, declaring_type)
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, count: usize) -> Self {
        self.parameter_count = count;
        self
    }
}

impl MethodDescriptor for MethodDescription {
    fn name(&self) -> &str {
        &self.name
    }

    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn declaring_type(&self) -> &TypeDescription {
        &self.declaring_type
    }

    fn parameter_count(&self) -> usize {
        self.parameter_count
    }

    fn kind(&self) -> MethodKind {
        self.kind
    }
}

impl fmt::Display for MethodDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.parameter_count == 1 { "" } else { "s" };
        write!(
            f,
            "{}#{}({} param{plural})",
            self.declaring_type.as_erasure(),
            self.name,
            self.parameter_count,
        )
    }
}
