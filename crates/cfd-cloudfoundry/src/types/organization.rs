//! v2 organization entity.

use serde::Deserialize;

use super::{Entity, ResourceKind};

/// Organization payload of `/v2/organizations`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationEntity {
    /// Organization name.
    pub name: String,
    /// Organization status (`active` / `suspended`).
    #[serde(default)]
    pub status: String,
    /// Assigned organization quota.
    #[serde(default)]
    pub quota_definition_guid: Option<String>,
    /// Whether billing is enabled.
    #[serde(default)]
    pub billing_enabled: bool,
}

impl Entity for OrganizationEntity {
    const KIND: ResourceKind = ResourceKind::Organization;

    fn name(&self) -> &str {
        &self.name
    }
}
