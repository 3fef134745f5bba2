//! The generators that can be registered for a type.
//!
//! Most are projections: read or write one field reached by a fixed path, or
//! forward a call to a method of one field. `items` converts between a list's
//! concrete items and their capability-typed view.

mod accessor;
mod items;
mod reclaim;
mod reference;
mod status;

pub use accessor::{Delegate, Getter, Setter};
pub use items::{GetPortableClassItems, SetPortableClassItems};
pub use reclaim::{new_get_reclaim_policy, new_set_reclaim_policy};
pub use reference::{
    new_get_claim_reference, new_get_non_portable_class_reference,
    new_get_portable_class_reference, new_get_resource_reference,
    new_get_write_connection_secret_to_reference, new_set_claim_reference,
    new_set_non_portable_class_reference, new_set_portable_class_reference,
    new_set_resource_reference, new_set_write_connection_secret_to_reference,
};
pub use status::{
    new_get_binding_phase, new_get_condition, new_set_binding_phase, new_set_conditions,
};

/// Doc comment emitted above every generated method
pub(crate) fn doc_comment(method: &str, type_name: &str) -> String {
    format!("{} of this {}.", method, type_name)
}
