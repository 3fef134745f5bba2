//! The registries written for each kind of type.

use crate::generators::*;
use crate::registry::MethodRegistry;
use methodsynth_emitter::is_keyword;
use methodsynth_model::fields::{NAME_SPEC, NAME_SPEC_TEMPLATE};
use methodsynth_model::Kind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RUNTIME: &str = "github.com/crossplaneio/crossplane-runtime/apis/core/v1alpha1";
pub const DEFAULT_CORE: &str = "k8s.io/api/core/v1";
pub const DEFAULT_RESOURCE: &str = "github.com/crossplaneio/crossplane-runtime/pkg/resource";

/// Import paths of the packages generated methods reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Imports {
    /// Conditions, binding phases and reclaim policies
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Object references
    #[serde(default = "default_core")]
    pub core: String,

    /// The portable class capability
    #[serde(default = "default_resource")]
    pub resource: String,
}

fn default_runtime() -> String {
    DEFAULT_RUNTIME.to_string()
}

fn default_core() -> String {
    DEFAULT_CORE.to_string()
}

fn default_resource() -> String {
    DEFAULT_RESOURCE.to_string()
}

impl Default for Imports {
    fn default() -> Self {
        Self {
            runtime: default_runtime(),
            core: default_core(),
            resource: default_resource(),
        }
    }
}

/// Parameter and local names that appear inside generated method bodies
pub const BODY_NAMES: &[&str] = &["actual", "c", "ct", "i", "items", "j", "p", "r"];

/// Whether `name` can be used as the receiver of generated methods.
///
/// It must be a Go identifier that is not a keyword and does not clash with
/// a name used inside a generated body.
pub fn is_valid_receiver(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic());

    starts_well
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && !is_keyword(name)
        && !BODY_NAMES.contains(&name)
}

pub fn managed(receiver: &str, imports: &Imports) -> MethodRegistry {
    MethodRegistry::new()
        .with(new_set_conditions(receiver, &imports.runtime))
        .with(new_get_condition(receiver, &imports.runtime))
        .with(new_set_binding_phase(receiver, &imports.runtime))
        .with(new_get_binding_phase(receiver, &imports.runtime))
        .with(new_set_claim_reference(receiver, &imports.core))
        .with(new_get_claim_reference(receiver, &imports.core))
        .with(new_set_non_portable_class_reference(receiver, &imports.core))
        .with(new_get_non_portable_class_reference(receiver, &imports.core))
        .with(new_set_write_connection_secret_to_reference(receiver, &imports.core))
        .with(new_get_write_connection_secret_to_reference(receiver, &imports.core))
        .with(new_set_reclaim_policy(receiver, &imports.runtime, NAME_SPEC))
        .with(new_get_reclaim_policy(receiver, &imports.runtime, NAME_SPEC))
}

pub fn claim(receiver: &str, imports: &Imports) -> MethodRegistry {
    MethodRegistry::new()
        .with(new_set_conditions(receiver, &imports.runtime))
        .with(new_get_condition(receiver, &imports.runtime))
        .with(new_set_binding_phase(receiver, &imports.runtime))
        .with(new_get_binding_phase(receiver, &imports.runtime))
        .with(new_set_resource_reference(receiver, &imports.core))
        .with(new_get_resource_reference(receiver, &imports.core))
        .with(new_set_portable_class_reference(receiver, &imports.core))
        .with(new_get_portable_class_reference(receiver, &imports.core))
        .with(new_set_write_connection_secret_to_reference(receiver, &imports.core))
        .with(new_get_write_connection_secret_to_reference(receiver, &imports.core))
}

pub fn non_portable_class(receiver: &str, imports: &Imports) -> MethodRegistry {
    MethodRegistry::new()
        .with(new_set_reclaim_policy(receiver, &imports.runtime, NAME_SPEC_TEMPLATE))
        .with(new_get_reclaim_policy(receiver, &imports.runtime, NAME_SPEC_TEMPLATE))
}

pub fn portable_class_list(receiver: &str, imports: &Imports) -> MethodRegistry {
    MethodRegistry::new()
        .with(SetPortableClassItems::new(receiver, &imports.resource))
        .with(GetPortableClassItems::new(receiver, &imports.resource))
}

pub fn for_kind(kind: Kind, receiver: &str, imports: &Imports) -> MethodRegistry {
    match kind {
        Kind::Managed => managed(receiver, imports),
        Kind::Claim => claim(receiver, imports),
        Kind::NonPortableClass => non_portable_class(receiver, imports),
        Kind::PortableClassList => portable_class_list(receiver, imports),
    }
}
