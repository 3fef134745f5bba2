use super::accessor::Delegate;
use methodsynth_emitter::TypeRef;
use methodsynth_model::fields::NAME_STATUS;

/// `SetConditions(c ...Condition)`, forwarded to the type's Status.
pub fn new_set_conditions(receiver: &str, runtime: &str) -> Delegate {
    Delegate::new("SetConditions", receiver, NAME_STATUS)
        .param("c", TypeRef::qualified(runtime, "Condition").variadic())
}

/// `GetCondition(ct ConditionType) Condition`, forwarded to the type's Status.
pub fn new_get_condition(receiver: &str, runtime: &str) -> Delegate {
    Delegate::new("GetCondition", receiver, NAME_STATUS)
        .param("ct", TypeRef::qualified(runtime, "ConditionType"))
        .returns(TypeRef::qualified(runtime, "Condition"))
}

pub fn new_set_binding_phase(receiver: &str, runtime: &str) -> Delegate {
    Delegate::new("SetBindingPhase", receiver, NAME_STATUS)
        .param("p", TypeRef::qualified(runtime, "BindingPhase"))
}

pub fn new_get_binding_phase(receiver: &str, runtime: &str) -> Delegate {
    Delegate::new("GetBindingPhase", receiver, NAME_STATUS)
        .returns(TypeRef::qualified(runtime, "BindingPhase"))
}
