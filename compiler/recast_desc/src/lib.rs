//! Type and method descriptions for Recast.
//!
//! These are the read-only views the redefinition pipeline hands to method
//! selection. Only the queries selection needs are modelled:
//! - `Modifiers`: JVM access flags as a bit-set
//! - `TypeDescription`: generic or erased type, normalized via erasure
//! - `MethodDescriptor`: modifiers, virtuality and declaring type
//!
//! # Erasure
//!
//! Declaring-type identity is always compared through [`ErasedType`].
//! A parameterized `java.util.List<T>` and the raw `java.util.List` have
//! equal erasures.

mod method;
mod modifiers;
mod type_desc;

pub use method::{MethodDescription, MethodDescriptor, MethodKind};
pub use modifiers::{Modifiers, Visibility};
pub use type_desc::{ErasedType, TypeDescription, TypeSort};
