//! v2 application entity.

use serde::Deserialize;

use super::{Entity, ResourceKind};

/// Application payload of `/v2/apps`.
///
/// Only includes fields the diagrams use or display.
/// Serde ignores unknown fields from the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct AppEntity {
    /// Application name.
    pub name: String,
    /// Owning space.
    pub space_guid: String,
    /// Stack the droplet runs on.
    #[serde(default)]
    pub stack_guid: Option<String>,
    /// Buildpack requested by the user (name or git URL).
    #[serde(default)]
    pub buildpack: Option<String>,
    /// Buildpack detected during staging.
    #[serde(default)]
    pub detected_buildpack: Option<String>,
    /// GUID of the buildpack detected during staging.
    #[serde(default)]
    pub detected_buildpack_guid: Option<String>,
    /// Desired state (`STARTED` / `STOPPED`).
    #[serde(default)]
    pub state: String,
    /// Memory limit in MB.
    #[serde(default)]
    pub memory: u64,
    /// Instance count.
    #[serde(default)]
    pub instances: u32,
    /// Disk limit in MB.
    #[serde(default)]
    pub disk_quota: u64,
    /// Docker image for docker lifecycle apps.
    #[serde(default)]
    pub docker_image: Option<String>,
    /// Health check type (`port`, `http`, `process`).
    #[serde(default)]
    pub health_check_type: Option<String>,
}

impl AppEntity {
    /// Detected buildpack GUID, treating `null` and `""` alike.
    pub fn detected_buildpack_guid(&self) -> Option<&str> {
        self.detected_buildpack_guid
            .as_deref()
            .filter(|guid| !guid.is_empty())
    }
}

impl Entity for AppEntity {
    const KIND: ResourceKind = ResourceKind::App;

    fn name(&self) -> &str {
        &self.name
    }
}
