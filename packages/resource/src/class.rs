use serde::{Deserialize, Serialize};
use std::any::Any;

/// A reference to another object by kind, name, and namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl ObjectReference {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            namespace: String::new(),
        }
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// A class that points at a non-portable class holding its configuration.
///
/// The `as_any` accessors let callers narrow a `&dyn PortableClass` back to
/// its concrete type with `narrow`.
pub trait PortableClass: Any {
    fn get_non_portable_class_reference(&self) -> Option<&ObjectReference>;

    fn set_non_portable_class_reference(&mut self, r: Option<ObjectReference>);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Narrow a portable class to the concrete type `T`.
///
/// Returns `None` when the class is of any other type.
pub fn narrow<T: PortableClass>(class: &dyn PortableClass) -> Option<&T> {
    class.as_any().downcast_ref::<T>()
}

pub fn narrow_mut<T: PortableClass>(class: &mut dyn PortableClass) -> Option<&mut T> {
    class.as_any_mut().downcast_mut::<T>()
}
