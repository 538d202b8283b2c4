//! v2 space entity.

use serde::Deserialize;

use super::{Entity, ResourceKind};

/// Space payload of `/v2/spaces`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceEntity {
    /// Space name.
    pub name: String,
    /// Owning organization.
    pub organization_guid: String,
    /// Space quota, if one is assigned.
    #[serde(default)]
    pub space_quota_definition_guid: Option<String>,
    /// Whether SSH access is allowed.
    #[serde(default)]
    pub allow_ssh: bool,
}

impl Entity for SpaceEntity {
    const KIND: ResourceKind = ResourceKind::Space;

    fn name(&self) -> &str {
        &self.name
    }
}
