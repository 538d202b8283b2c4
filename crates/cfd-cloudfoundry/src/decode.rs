//! Decoding raw envelopes into typed records.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::CloudFoundryError;
use crate::types::{Entity, RawResource, Resource};

/// Decode every raw envelope into a typed record.
///
/// The result is keyed by the same GUID as the input. One record that does
/// not match `E` fails the whole collection.
pub fn decode_resources<E: Entity>(
    raw: BTreeMap<String, RawResource>,
) -> Result<BTreeMap<String, Resource<E>>, CloudFoundryError> {
    let decoded = raw
        .into_iter()
        .map(|(guid, resource)| {
            let entity = serde_json::from_value::<E>(resource.entity).map_err(|source| {
                CloudFoundryError::Decode {
                    kind: E::KIND,
                    guid: guid.clone(),
                    source,
                }
            })?;
            let record = Resource {
                metadata: resource.metadata,
                entity,
            };
            Ok((guid, record))
        })
        .collect::<Result<BTreeMap<_, _>, CloudFoundryError>>()?;

    debug!("Decoded {} {} record(s)", decoded.len(), E::KIND);
    Ok(decoded)
}

/// Find a record by display name.
///
/// Stacks and buildpacks are sometimes referenced by name rather than GUID
/// (buildpack stack field, v3 lifecycle data).
pub fn find_by_name<'a, E: Entity>(
    records: &'a BTreeMap<String, Resource<E>>,
    name: &str,
) -> Option<&'a Resource<E>> {
    records.values().find(|record| record.entity.name() == name)
}
