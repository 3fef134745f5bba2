//! # Methodsynth Method
//!
//! Decides which boilerplate accessor and mutator methods a declared type
//! needs and emits exactly those, skipping any a user already wrote.
//!
//! ```rust
//! use methodsynth_emitter::GoFile;
//! use methodsynth_method::{presets, DefinedOutside, Imports};
//! use methodsynth_model::TypeDescriptor;
//!
//! let registry = presets::non_portable_class("cs", &Imports::default());
//! let filter = DefinedOutside::new("zz_generated.nonportableclass.go");
//!
//! let mut file = GoFile::new("v1alpha1", "example.org/storage/v1alpha1");
//! registry.write(&mut file, &TypeDescriptor::new("BucketClass"), &filter);
//!
//! assert!(file.render().contains("func (cs *BucketClass) GetReclaimPolicy()"));
//! ```

pub mod filter;
pub mod generators;
pub mod presets;
pub mod registry;

pub use filter::{suppress_none, DefinedOutside, Filter};
pub use presets::Imports;
pub use registry::{generator, FnGenerator, MethodGenerator, MethodRegistry};
