use super::doc_comment;
use crate::registry::MethodGenerator;
use methodsynth_emitter::{FuncDecl, SourceEmitter, Stmt, TypeRef};
use methodsynth_model::fields::{list_element, NAME_ITEMS};
use methodsynth_model::TypeDescriptor;

const PORTABLE_CLASS: &str = "PortableClass";

/// The concrete element type of a list type: its name without the `List` suffix.
fn element(ty: &TypeDescriptor) -> &str {
    list_element(&ty.name).unwrap_or(&ty.name)
}

/// `SetPortableClassItems(i []PortableClass)`.
///
/// Replaces the list's items with every supplied class that narrows to the
/// list's element type. Classes of any other type are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPortableClassItems {
    receiver: String,
    resource: String,
}

impl SetPortableClassItems {
    pub fn new(receiver: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            resource: resource.into(),
        }
    }
}

impl MethodGenerator for SetPortableClassItems {
    fn name(&self) -> &str {
        "SetPortableClassItems"
    }

    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor) {
        let element = element(ty);
        let items = format!("{}.{}", self.receiver, NAME_ITEMS);

        out.comment(&doc_comment(self.name(), &ty.name));
        out.declare(
            FuncDecl::method(&self.receiver, &ty.name, self.name())
                .param(
                    "i",
                    TypeRef::qualified(&self.resource, PORTABLE_CLASS).slice(),
                )
                .stmt(Stmt::line(format!(
                    "{} = make([]{}, 0, len(i))",
                    items, element
                )))
                .stmt(Stmt::block(
                    "for j := range i",
                    vec![Stmt::block(
                        format!("if actual, ok := i[j].(*{}); ok", element),
                        vec![Stmt::line(format!(
                            "{} = append({}, *actual)",
                            items, items
                        ))],
                    )],
                )),
        );
    }
}

/// `GetPortableClassItems() []PortableClass`.
///
/// Returns a view of the list's items: each entry points at the element in
/// place, in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPortableClassItems {
    receiver: String,
    resource: String,
}

impl GetPortableClassItems {
    pub fn new(receiver: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            resource: resource.into(),
        }
    }
}

impl MethodGenerator for GetPortableClassItems {
    fn name(&self) -> &str {
        "GetPortableClassItems"
    }

    fn generate(&self, out: &mut dyn SourceEmitter, ty: &TypeDescriptor) {
        let class = out.qualify(&self.resource, PORTABLE_CLASS);
        let items = format!("{}.{}", self.receiver, NAME_ITEMS);

        out.comment(&doc_comment(self.name(), &ty.name));
        out.declare(
            FuncDecl::method(&self.receiver, &ty.name, self.name())
                .returns(TypeRef::qualified(&self.resource, PORTABLE_CLASS).slice())
                .stmt(Stmt::line(format!(
                    "items := make([]{}, len({}))",
                    class, items
                )))
                .stmt(Stmt::block(
                    format!("for i := range {}", items),
                    vec![Stmt::line(format!("items[i] = {}(&{}[i])", class, items))],
                ))
                .stmt(Stmt::line("return items")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodsynth_emitter::GoFile;
    use pretty_assertions::assert_eq;

    const RESOURCE: &str = "example.org/runtime/pkg/resource";

    #[test]
    fn test_portable_class_items() {
        let mut file = GoFile::new("v1alpha1", "example.org/database/v1alpha1");
        let ty = TypeDescriptor::new("MySQLInstanceClassList");
        GetPortableClassItems::new("pcl", RESOURCE).generate(&mut file, &ty);
        SetPortableClassItems::new("pcl", RESOURCE).generate(&mut file, &ty);

        let expected = "\
package v1alpha1

import (
\tresource \"example.org/runtime/pkg/resource\"
)

// GetPortableClassItems of this MySQLInstanceClassList.
func (pcl *MySQLInstanceClassList) GetPortableClassItems() []resource.PortableClass {
\titems := make([]resource.PortableClass, len(pcl.Items))
\tfor i := range pcl.Items {
\t\titems[i] = resource.PortableClass(&pcl.Items[i])
\t}
\treturn items
}

// SetPortableClassItems of this MySQLInstanceClassList.
func (pcl *MySQLInstanceClassList) SetPortableClassItems(i []resource.PortableClass) {
\tpcl.Items = make([]MySQLInstanceClass, 0, len(i))
\tfor j := range i {
\t\tif actual, ok := i[j].(*MySQLInstanceClass); ok {
\t\t\tpcl.Items = append(pcl.Items, *actual)
\t\t}
\t}
}
";
        assert_eq!(file.render(), expected);
    }

    #[test]
    fn test_element_of_unsuffixed_name_is_the_name() {
        assert_eq!(element(&TypeDescriptor::new("Things")), "Things");
        assert_eq!(element(&TypeDescriptor::new("ThingList")), "Thing");
    }
}
