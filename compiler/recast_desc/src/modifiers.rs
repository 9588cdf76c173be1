//! JVM access flags for methods.
//!
//! Bit values follow the class file format (JVMS 4.6), so a raw
//! `access_flags` word can be lifted with [`Modifiers::from_access`].

use bitflags::bitflags;

bitflags! {
    /// Method access flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        /// Accessible from outside its package.
        const PUBLIC = 0x0001;
        /// Accessible only within the declaring type.
        const PRIVATE = 0x0002;
        /// Accessible within subclasses.
        const PROTECTED = 0x0004;
        /// Belongs to the type, not an instance.
        const STATIC = 0x0008;
        /// Cannot be overridden.
        const FINAL = 0x0010;
        /// Invocation is wrapped by a monitor.
        const SYNCHRONIZED = 0x0020;
        /// Bridge method generated by the compiler.
        const BRIDGE = 0x0040;
        /// Declared with a variable number of arguments.
        const VARARGS = 0x0080;
        /// Implemented in native code.
        const NATIVE = 0x0100;
        /// No implementation provided.
        const ABSTRACT = 0x0400;
        /// Strict floating point.
        const STRICT = 0x0800;
        /// Not present in source code.
        const SYNTHETIC = 0x1000;
    }
}

/// Access level derived from the visibility bits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    Protected,
    /// No visibility bit set.
    Package,
    Private,
}

impl Modifiers {
    /// Lift a raw class file `access_flags` word, dropping unknown bits.
    #[inline]
    pub const fn from_access(access: u16) -> Self {
        Self::from_bits_truncate(access)
    }

    #[inline]
    pub const fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    #[inline]
    pub const fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    #[inline]
    pub const fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    #[inline]
    pub const fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }

    #[inline]
    pub const fn is_synthetic(self) -> bool {
        self.contains(Self::SYNTHETIC)
    }

    #[inline]
    pub const fn is_bridge(self) -> bool {
        self.contains(Self::BRIDGE)
    }

    /// Visibility, checked from most to least restrictive.
    pub const fn visibility(self) -> Visibility {
        if self.contains(Self::PRIVATE) {
            Visibility::Private
        } else if self.contains(Self::PROTECTED) {
            Visibility::Protected
        } else if self.contains(Self::PUBLIC) {
            Visibility::Public
        } else {
            Visibility::Package
        }
    }

    /// Look up a single modifier by its source keyword (`"final"`, `"static"`, ...).
    ///
    /// Flags without a keyword use their lowercase name (`"bridge"`, `"synthetic"`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let flag = match keyword {
            "public" => Self::PUBLIC,
            "private" => Self::PRIVATE,
            "protected" => Self::PROTECTED,
            "static" => Self::STATIC,
            "final" => Self::FINAL,
            "synchronized" => Self::SYNCHRONIZED,
            "bridge" => Self::BRIDGE,
            "varargs" => Self::VARARGS,
            "native" => Self::NATIVE,
            "abstract" => Self::ABSTRACT,
            "strictfp" => Self::STRICT,
            "synthetic" => Self::SYNTHETIC,
            _ => return None,
        };
        Some(flag)
    }
}

#[cfg(test)]
mod tests;
