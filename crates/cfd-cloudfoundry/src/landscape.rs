//! In-memory resource graph of one platform.

use std::collections::BTreeMap;

use crate::decode::find_by_name;
use crate::types::{App, Buildpack, Organization, QuotaDefinition, Space, Stack};

/// Typed resource maps of one fetch pass, all keyed by GUID.
///
/// Built by the caller from the values returned by the client; records are
/// not modified after decoding.
#[derive(Debug, Clone, Default)]
pub struct Landscape {
    pub stacks: BTreeMap<String, Stack>,
    pub buildpacks: BTreeMap<String, Buildpack>,
    pub quota_definitions: BTreeMap<String, QuotaDefinition>,
    pub organizations: BTreeMap<String, Organization>,
    pub spaces: BTreeMap<String, Space>,
    pub apps: BTreeMap<String, App>,
}

impl Landscape {
    /// Look up a stack by name.
    pub fn stack_by_name(&self, name: &str) -> Option<&Stack> {
        find_by_name(&self.stacks, name)
    }

    /// Look up a buildpack by name.
    pub fn buildpack_by_name(&self, name: &str) -> Option<&Buildpack> {
        find_by_name(&self.buildpacks, name)
    }

    /// Look up a buildpack by name, preferring the one built for `stack`.
    ///
    /// The same buildpack name is registered once per stack; without a match
    /// for `stack` the first record with that name is returned.
    pub fn buildpack_for_stack(&self, name: &str, stack: Option<&str>) -> Option<&Buildpack> {
        stack
            .and_then(|stack| {
                self.buildpacks
                    .values()
                    .find(|bp| bp.entity.name == name && bp.entity.stack_name() == Some(stack))
            })
            .or_else(|| self.buildpack_by_name(name))
    }
}
