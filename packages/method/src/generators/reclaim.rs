use super::accessor::{Getter, Setter};
use methodsynth_emitter::{Param, TypeRef};

/// `SetReclaimPolicy(r ReclaimPolicy)`, stored in the supplied field,
/// typically Spec or SpecTemplate.
pub fn new_set_reclaim_policy(receiver: &str, runtime: &str, field: &str) -> Setter {
    Setter::new(
        "SetReclaimPolicy",
        receiver,
        Param::new("r", TypeRef::qualified(runtime, "ReclaimPolicy")),
        &[field, "ReclaimPolicy"],
    )
}

/// `GetReclaimPolicy() ReclaimPolicy`, read from the supplied field.
pub fn new_get_reclaim_policy(receiver: &str, runtime: &str, field: &str) -> Getter {
    Getter::new(
        "GetReclaimPolicy",
        receiver,
        TypeRef::qualified(runtime, "ReclaimPolicy"),
        &[field, "ReclaimPolicy"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MethodGenerator;
    use methodsynth_emitter::GoFile;
    use methodsynth_model::fields::{NAME_SPEC, NAME_SPEC_TEMPLATE};
    use methodsynth_model::TypeDescriptor;

    const RUNTIME: &str = "example.org/runtime/apis/core/v1alpha1";

    #[test]
    fn test_reclaim_policy_in_spec() {
        let mut file = GoFile::new("v1alpha1", "");
        let ty = TypeDescriptor::new("Bucket");
        new_set_reclaim_policy("mg", RUNTIME, NAME_SPEC).generate(&mut file, &ty);
        new_get_reclaim_policy("mg", RUNTIME, NAME_SPEC).generate(&mut file, &ty);

        let output = file.render();
        assert!(output.contains(
            "func (mg *Bucket) SetReclaimPolicy(r v1alpha1.ReclaimPolicy) {\n\tmg.Spec.ReclaimPolicy = r\n}"
        ));
        assert!(output.contains(
            "func (mg *Bucket) GetReclaimPolicy() v1alpha1.ReclaimPolicy {\n\treturn mg.Spec.ReclaimPolicy\n}"
        ));
    }

    #[test]
    fn test_reclaim_policy_in_spec_template() {
        let mut file = GoFile::new("v1alpha1", "");
        let ty = TypeDescriptor::new("BucketClass");
        new_set_reclaim_policy("cs", RUNTIME, NAME_SPEC_TEMPLATE).generate(&mut file, &ty);
        new_get_reclaim_policy("cs", RUNTIME, NAME_SPEC_TEMPLATE).generate(&mut file, &ty);

        let output = file.render();
        assert!(output.contains("\tcs.SpecTemplate.ReclaimPolicy = r\n"));
        assert!(output.contains("\treturn cs.SpecTemplate.ReclaimPolicy\n"));
    }
}
