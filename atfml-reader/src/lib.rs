//! Reader for access transformers in the FML line format.
//!
//! ```text
//! # widen a class, a field and a method
//! public net.example.Foo
//! public-f net.example.Foo counter
//! protected net.example.Foo doit(I)V
//! # every method declared above
//! public net.example.Foo *()
//! ```
//!
//! Lines are merged into an [`AccessTransformSet`](atfml_core::AccessTransformSet):
//!
//! ```
//! use atfml_core::{AccessChange, AccessTransformSet};
//!
//! let mut set = AccessTransformSet::new();
//! atfml_reader::read_str("public net.example.Foo # widen", &mut set).unwrap();
//! let foo = set.class("net.example.Foo").unwrap();
//! assert_eq!(foo.class_transform().access, AccessChange::Public);
//! ```

pub mod error;
pub mod reader;
pub mod spec;

pub use error::{ReadError, SpecError};
pub use reader::{FmlReader, read, read_path, read_str};
pub use spec::parse_access_transform;
