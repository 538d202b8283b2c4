//! v2 buildpack entity.

use serde::Deserialize;

use super::{Entity, ResourceKind};

/// Buildpack payload of `/v2/buildpacks`.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildpackEntity {
    /// Buildpack name.
    pub name: String,
    /// Name of the stack this buildpack targets; `null` for any stack.
    #[serde(default)]
    pub stack: Option<String>,
    /// Detection order.
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub locked: bool,
    /// Uploaded archive name.
    #[serde(default)]
    pub filename: Option<String>,
}

impl BuildpackEntity {
    /// Stack name, treating `null` and `""` alike.
    pub fn stack_name(&self) -> Option<&str> {
        self.stack.as_deref().filter(|name| !name.is_empty())
    }
}

impl Entity for BuildpackEntity {
    const KIND: ResourceKind = ResourceKind::Buildpack;

    fn name(&self) -> &str {
        &self.name
    }
}
