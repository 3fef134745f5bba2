use super::accessor::{Getter, Setter};
use methodsynth_emitter::{Param, TypeRef};
use methodsynth_model::fields::NAME_SPEC;

const OBJECT_REFERENCE: &str = "ObjectReference";
const LOCAL_OBJECT_REFERENCE: &str = "LocalObjectReference";

fn object_reference(core: &str) -> TypeRef {
    TypeRef::qualified(core, OBJECT_REFERENCE).pointer()
}

fn local_object_reference(core: &str) -> TypeRef {
    TypeRef::qualified(core, LOCAL_OBJECT_REFERENCE)
}

fn setter(method: &str, receiver: &str, ty: TypeRef, field: &str) -> Setter {
    Setter::new(method, receiver, Param::new("r", ty), &[NAME_SPEC, field])
}

fn getter(method: &str, receiver: &str, ty: TypeRef, field: &str) -> Getter {
    Getter::new(method, receiver, ty, &[NAME_SPEC, field])
}

pub fn new_set_claim_reference(receiver: &str, core: &str) -> Setter {
    setter("SetClaimReference", receiver, object_reference(core), "ClaimReference")
}

pub fn new_get_claim_reference(receiver: &str, core: &str) -> Getter {
    getter("GetClaimReference", receiver, object_reference(core), "ClaimReference")
}

pub fn new_set_resource_reference(receiver: &str, core: &str) -> Setter {
    setter("SetResourceReference", receiver, object_reference(core), "ResourceReference")
}

pub fn new_get_resource_reference(receiver: &str, core: &str) -> Getter {
    getter("GetResourceReference", receiver, object_reference(core), "ResourceReference")
}

pub fn new_set_non_portable_class_reference(receiver: &str, core: &str) -> Setter {
    setter(
        "SetNonPortableClassReference",
        receiver,
        object_reference(core),
        "NonPortableClassReference",
    )
}

pub fn new_get_non_portable_class_reference(receiver: &str, core: &str) -> Getter {
    getter(
        "GetNonPortableClassReference",
        receiver,
        object_reference(core),
        "NonPortableClassReference",
    )
}

/// Portable class references are namespace-local, so they use a
/// `*LocalObjectReference`.
pub fn new_set_portable_class_reference(receiver: &str, core: &str) -> Setter {
    setter(
        "SetPortableClassReference",
        receiver,
        local_object_reference(core).pointer(),
        "PortableClassReference",
    )
}

pub fn new_get_portable_class_reference(receiver: &str, core: &str) -> Getter {
    getter(
        "GetPortableClassReference",
        receiver,
        local_object_reference(core).pointer(),
        "PortableClassReference",
    )
}

/// The connection secret reference is held by value, not by pointer.
pub fn new_set_write_connection_secret_to_reference(receiver: &str, core: &str) -> Setter {
    setter(
        "SetWriteConnectionSecretToReference",
        receiver,
        local_object_reference(core),
        "WriteConnectionSecretToReference",
    )
}

pub fn new_get_write_connection_secret_to_reference(receiver: &str, core: &str) -> Getter {
    getter(
        "GetWriteConnectionSecretToReference",
        receiver,
        local_object_reference(core),
        "WriteConnectionSecretToReference",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MethodGenerator;
    use methodsynth_emitter::GoFile;
    use methodsynth_model::TypeDescriptor;

    const CORE: &str = "k8s.io/api/core/v1";

    fn render(generators: &[&dyn MethodGenerator]) -> String {
        let mut file = GoFile::new("v1alpha1", "example.org/storage/v1alpha1");
        let ty = TypeDescriptor::new("Bucket");
        for g in generators {
            g.generate(&mut file, &ty);
        }
        file.render()
    }

    #[test]
    fn test_claim_reference() {
        let output = render(&[
            &new_get_claim_reference("mg", CORE),
            &new_set_claim_reference("mg", CORE),
        ]);
        assert!(output.contains("\tv1 \"k8s.io/api/core/v1\"\n"));
        assert!(output.contains("// GetClaimReference of this Bucket.\n"));
        assert!(output.contains(
            "func (mg *Bucket) GetClaimReference() *v1.ObjectReference {\n\treturn mg.Spec.ClaimReference\n}"
        ));
        assert!(output.contains(
            "func (mg *Bucket) SetClaimReference(r *v1.ObjectReference) {\n\tmg.Spec.ClaimReference = r\n}"
        ));
    }

    #[test]
    fn test_resource_reference() {
        let output = render(&[&new_set_resource_reference("cm", CORE)]);
        assert!(output.contains(
            "func (cm *Bucket) SetResourceReference(r *v1.ObjectReference) {\n\tcm.Spec.ResourceReference = r\n}"
        ));
        let output = render(&[&new_get_resource_reference("cm", CORE)]);
        assert!(output.contains("return cm.Spec.ResourceReference"));
    }

    #[test]
    fn test_non_portable_class_reference() {
        let output = render(&[
            &new_get_non_portable_class_reference("mg", CORE),
            &new_set_non_portable_class_reference("mg", CORE),
        ]);
        assert!(output.contains("GetNonPortableClassReference() *v1.ObjectReference {"));
        assert!(output.contains("mg.Spec.NonPortableClassReference = r"));
    }

    #[test]
    fn test_portable_class_reference_is_local() {
        let output = render(&[
            &new_get_portable_class_reference("cm", CORE),
            &new_set_portable_class_reference("cm", CORE),
        ]);
        assert!(output.contains("GetPortableClassReference() *v1.LocalObjectReference {"));
        assert!(output.contains("SetPortableClassReference(r *v1.LocalObjectReference) {"));
    }

    #[test]
    fn test_write_connection_secret_reference_is_a_value() {
        let output = render(&[
            &new_get_write_connection_secret_to_reference("mg", CORE),
            &new_set_write_connection_secret_to_reference("mg", CORE),
        ]);
        assert!(output.contains(
            "func (mg *Bucket) GetWriteConnectionSecretToReference() v1.LocalObjectReference {"
        ));
        assert!(output.contains(
            "func (mg *Bucket) SetWriteConnectionSecretToReference(r v1.LocalObjectReference) {\n\tmg.Spec.WriteConnectionSecretToReference = r\n}"
        ));
    }
}
