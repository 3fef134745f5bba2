//! Well-known field names and the structural matchers that decide which
//! registry a type should be written with.

use crate::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_SPEC: &str = "Spec";
pub const NAME_SPEC_TEMPLATE: &str = "SpecTemplate";
pub const NAME_STATUS: &str = "Status";
pub const NAME_ITEMS: &str = "Items";

pub const TYPE_RESOURCE_SPEC: &str = "ResourceSpec";
pub const TYPE_RESOURCE_STATUS: &str = "ResourceStatus";
pub const TYPE_RESOURCE_CLAIM_SPEC: &str = "ResourceClaimSpec";
pub const TYPE_RESOURCE_CLAIM_STATUS: &str = "ResourceClaimStatus";
pub const TYPE_NON_PORTABLE_CLASS_SPEC_TEMPLATE: &str = "NonPortableClassSpecTemplate";

/// Suffix that distinguishes a list type from its element type
pub const LIST_SUFFIX: &str = "List";

/// The shapes of type a registry preset is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Kind {
    Managed,
    Claim,
    NonPortableClass,
    PortableClassList,
}

impl Kind {
    pub const ALL: [Kind; 4] = [
        Kind::Managed,
        Kind::Claim,
        Kind::NonPortableClass,
        Kind::PortableClassList,
    ];

    pub fn matches(self, ty: &TypeDescriptor) -> bool {
        match self {
            Kind::Managed => is_managed(ty),
            Kind::Claim => is_claim(ty),
            Kind::NonPortableClass => is_non_portable_class(ty),
            Kind::PortableClassList => is_portable_class_list(ty),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Managed => "managed",
            Kind::Claim => "claim",
            Kind::NonPortableClass => "nonportableclass",
            Kind::PortableClassList => "portableclasslist",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown kind '{}'", s))
    }
}

fn embeds(ty: &TypeDescriptor, field: &str, embedded: &str) -> bool {
    ty.field(field).map(|f| f.embeds(embedded)).unwrap_or(false)
}

/// A managed resource's Spec and Status embed the shared resource structs.
pub fn is_managed(ty: &TypeDescriptor) -> bool {
    embeds(ty, NAME_SPEC, TYPE_RESOURCE_SPEC) && embeds(ty, NAME_STATUS, TYPE_RESOURCE_STATUS)
}

pub fn is_claim(ty: &TypeDescriptor) -> bool {
    embeds(ty, NAME_SPEC, TYPE_RESOURCE_CLAIM_SPEC)
        && embeds(ty, NAME_STATUS, TYPE_RESOURCE_CLAIM_STATUS)
}

pub fn is_non_portable_class(ty: &TypeDescriptor) -> bool {
    embeds(ty, NAME_SPEC_TEMPLATE, TYPE_NON_PORTABLE_CLASS_SPEC_TEMPLATE)
}

/// A portable class list is named `<Element>List` and holds `Items []<Element>`.
pub fn is_portable_class_list(ty: &TypeDescriptor) -> bool {
    let element = match list_element(&ty.name) {
        Some(element) => element,
        None => return false,
    };

    ty.field(NAME_ITEMS)
        .map(|f| f.slice && !f.pointer && f.type_name == element)
        .unwrap_or(false)
}

/// The element type name of a list type: its name without the `List` suffix.
///
/// Returns `None` when the name has no such suffix or is only the suffix.
pub fn list_element(name: &str) -> Option<&str> {
    name.strip_suffix(LIST_SUFFIX).filter(|e| !e.is_empty())
}
