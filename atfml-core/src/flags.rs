//! Class-file access flags touched by access transformers.
//!
//! Bit values match the `ACC_*` constants of the JVM class file format.

use bitflags::bitflags;

bitflags! {
    /// Access flags of a class, field or method.
    ///
    /// Only the bits a transform can change are named. Any other bit is kept
    /// as-is when a transform is applied (construct with
    /// [`AccessFlags::from_bits_retain`] to preserve them).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AccessFlags: u16 {
        /// Public access: field, method, class.
        const PUBLIC = 0x0001;
        /// Private access: field, method.
        const PRIVATE = 0x0002;
        /// Protected access: field, method.
        const PROTECTED = 0x0004;
        /// Static: field, method.
        const STATIC = 0x0008;
        /// Final: field, method, class.
        const FINAL = 0x0010;

        /// All visibility bits. Package-private is the absence of all three.
        const VISIBILITY = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();

        // Unnamed bits (synthetic, enum, ...) pass through untouched.
        const _ = !0;
    }
}

impl AccessFlags {
    /// The visibility bits currently set.
    #[inline]
    pub fn visibility(self) -> Self {
        self & Self::VISIBILITY
    }
}
