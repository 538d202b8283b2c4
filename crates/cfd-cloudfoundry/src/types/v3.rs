//! v3 application types (`/v3/apps/{guid}`).

use std::collections::BTreeMap;

use serde::Deserialize;

/// Lifecycle type of buildpack-staged apps.
pub const BUILDPACK_LIFECYCLE: &str = "buildpack";

/// v3 application resource.
#[derive(Debug, Clone, Deserialize)]
pub struct V3App {
    pub guid: String,
    pub name: String,
    /// Desired state (`STARTED` / `STOPPED`).
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub lifecycle: Lifecycle,
    pub relationships: Relationships,
    /// Hypermedia links keyed by relation (`self`, `space`, `droplets`, ...).
    #[serde(default)]
    pub links: BTreeMap<String, Link>,
}

impl V3App {
    /// GUID of the owning space.
    pub fn space_guid(&self) -> &str {
        &self.relationships.space.data.guid
    }

    /// Lifecycle data if the app is staged with buildpacks.
    pub fn buildpack_lifecycle(&self) -> Option<&LifecycleData> {
        (self.lifecycle.lifecycle_type == BUILDPACK_LIFECYCLE).then_some(&self.lifecycle.data)
    }
}

/// Build strategy of an app.
#[derive(Debug, Clone, Deserialize)]
pub struct Lifecycle {
    /// `buildpack` or `docker`.
    #[serde(rename = "type")]
    pub lifecycle_type: String,
    /// Empty object for docker lifecycles.
    #[serde(default)]
    pub data: LifecycleData,
}

/// Buildpack lifecycle data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LifecycleData {
    /// Buildpack names or URLs, in detection order.
    #[serde(default)]
    pub buildpacks: Vec<String>,
    /// Stack name.
    #[serde(default)]
    pub stack: Option<String>,
}

/// To-one relationships of an app.
#[derive(Debug, Clone, Deserialize)]
pub struct Relationships {
    pub space: ToOneRelationship,
}

/// A `{ "data": { "guid": ... } }` relationship.
#[derive(Debug, Clone, Deserialize)]
pub struct ToOneRelationship {
    pub data: RelationshipData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipData {
    pub guid: String,
}

/// Hypermedia link.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub method: Option<String>,
}
