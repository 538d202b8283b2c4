use serde::Deserialize;

use super::{Entity, ResourceKind};

/// Stack payload of `/v2/stacks`.
#[derive(Debug, Clone, Deserialize)]
pub struct StackEntity {
    /// Stack name (e.g. `cflinuxfs3`).
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for StackEntity {
    const KIND: ResourceKind = ResourceKind::Stack;

    fn name(&self) -> &str {
        &self.name
    }
}
