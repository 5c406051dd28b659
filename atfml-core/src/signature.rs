//! Method signatures used as keys for per-method transforms.

use std::fmt;

/// A method name together with its raw descriptor, e.g. `doit` + `(I)V`.
///
/// Equality and hashing are structural. The descriptor is kept verbatim;
/// it is never parsed or resolved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodSignature {
    pub name: String,
    pub descriptor: String,
}

impl MethodSignature {
    pub fn of(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.descriptor)
    }
}

/// Builds [`MethodSignature`] keys from the `name` and `(descriptor)` halves
/// of a method member token.
///
/// Implementations may canonicalise or intern the two parts; whatever they
/// return decides which method lines address the same entry.
pub trait SignatureFactory {
    fn of(&self, name: &str, descriptor: &str) -> MethodSignature;
}

/// Keeps name and descriptor exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralSignatures;

impl SignatureFactory for StructuralSignatures {
    fn of(&self, name: &str, descriptor: &str) -> MethodSignature {
        MethodSignature::of(name, descriptor)
    }
}

impl<F: SignatureFactory + ?Sized> SignatureFactory for &F {
    fn of(&self, name: &str, descriptor: &str) -> MethodSignature {
        (**self).of(name, descriptor)
    }
}
