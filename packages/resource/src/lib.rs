//! # Methodsynth Resource
//!
//! The capability a portable class satisfies, and the conversion between a
//! class list's concrete items and their capability-typed view. Generated
//! `SetPortableClassItems`/`GetPortableClassItems` methods follow the same
//! contract as `PortableClassList`.

mod class;
mod list;

pub use class::{narrow, narrow_mut, ObjectReference, PortableClass};
pub use list::PortableClassList;
