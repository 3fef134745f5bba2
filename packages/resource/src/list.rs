use crate::class::{narrow, PortableClass};
use tracing::debug;

/// A list of concrete portable classes that can be viewed and replaced
/// through the `PortableClass` capability.
pub trait PortableClassList {
    type Item: PortableClass + Clone;

    fn items(&self) -> &[Self::Item];

    fn items_mut(&mut self) -> &mut Vec<Self::Item>;

    /// Replace the list's items with a copy of each class that narrows to
    /// `Self::Item`, preserving order. Classes of other types are dropped.
    fn set_portable_class_items(&mut self, classes: &[&dyn PortableClass]) {
        let mut items = Vec::with_capacity(classes.len());
        for class in classes {
            if let Some(actual) = narrow::<Self::Item>(*class) {
                items.push(actual.clone());
            }
        }

        if items.len() < classes.len() {
            debug!(
                dropped = classes.len() - items.len(),
                "Dropped portable classes of a different type"
            );
        }
        *self.items_mut() = items;
    }

    /// A view of every item, in order. Entries borrow the items in place.
    fn get_portable_class_items(&self) -> Vec<&dyn PortableClass> {
        self.items()
            .iter()
            .map(|item| item as &dyn PortableClass)
            .collect()
    }

    fn get_portable_class_items_mut(&mut self) -> Vec<&mut dyn PortableClass> {
        self.items_mut()
            .iter_mut()
            .map(|item| item as &mut dyn PortableClass)
            .collect()
    }
}
