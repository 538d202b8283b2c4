//! Render error types.

use std::collections::BTreeMap;

use cfd_cloudfoundry::types::{Entity, Resource, ResourceKind};

/// Error while rendering a resource graph.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A foreign key points at a record missing from its map.
    #[error("{referenced_by} references unknown {kind} '{key}'")]
    MissingReference {
        /// Type of the missing record.
        kind: ResourceKind,
        /// GUID or name that was looked up.
        key: String,
        /// Record holding the dangling reference (e.g. "space 'dev'").
        referenced_by: String,
    },
}

/// Look up `guid` in `records`, failing with [`RenderError::MissingReference`].
pub(crate) fn resolve<'a, E: Entity>(
    records: &'a BTreeMap<String, Resource<E>>,
    guid: &str,
    referenced_by: impl FnOnce() -> String,
) -> Result<&'a Resource<E>, RenderError> {
    records.get(guid).ok_or_else(|| RenderError::MissingReference {
        kind: E::KIND,
        key: guid.to_owned(),
        referenced_by: referenced_by(),
    })
}
