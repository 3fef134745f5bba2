//! # Methodsynth Model
//!
//! Read-only metadata describing the declared types a generation pass works
//! over. Descriptors are produced by a front end (usually serialized as a
//! package manifest) and are immutable for the duration of one pass.

pub mod error;
pub mod fields;
pub mod manifest;
pub mod types;

pub use error::{ModelError, ModelResult};
pub use fields::Kind;
pub use manifest::PackageManifest;
pub use types::{FieldDescriptor, MethodDecl, Receiver, TypeDescriptor};
