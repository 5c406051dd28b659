//! Data model for access transformers.
//!
//! An access transformer asks for the visibility and/or `final` modifier of
//! a class, field or method to be changed. Requests for the same target are
//! folded together with [`AccessTransform::merge`], which is commutative and
//! associative, so a set built from many files does not depend on the order
//! the requests arrived in.

pub mod access;
pub mod class;
pub mod flags;
pub mod set;
pub mod signature;

pub use access::{AccessChange, AccessTransform, ModifierChange};
pub use class::ClassEntry;
pub use flags::AccessFlags;
pub use set::AccessTransformSet;
pub use signature::{MethodSignature, SignatureFactory, StructuralSignatures};
