//! v2 organization quota definition entity.

use serde::Deserialize;

use super::{Entity, ResourceKind};

/// Quota payload of `/v2/quota_definitions`.
///
/// Limits of `-1` mean unlimited.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotaDefinitionEntity {
    /// Quota name.
    pub name: String,
    #[serde(default)]
    pub non_basic_services_allowed: bool,
    #[serde(default)]
    pub total_services: i64,
    #[serde(default)]
    pub total_routes: i64,
    /// Total memory limit in MB.
    #[serde(default)]
    pub memory_limit: i64,
    /// Per-instance memory limit in MB.
    #[serde(default)]
    pub instance_memory_limit: i64,
    #[serde(default)]
    pub app_instance_limit: i64,
}

impl Entity for QuotaDefinitionEntity {
    const KIND: ResourceKind = ResourceKind::QuotaDefinition;

    fn name(&self) -> &str {
        &self.name
    }
}
