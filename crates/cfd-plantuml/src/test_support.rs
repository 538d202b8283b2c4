//! Fixture builders for renderer tests.

use std::collections::BTreeMap;

use cfd_cloudfoundry::Landscape;
use cfd_cloudfoundry::types::Resource;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Build a [`Landscape`] from `{"<collection>": [[guid, entity], ...]}`.
pub(crate) fn landscape(fixture: Value) -> Landscape {
    Landscape {
        stacks: records(&fixture, "stacks"),
        buildpacks: records(&fixture, "buildpacks"),
        quota_definitions: records(&fixture, "quota_definitions"),
        organizations: records(&fixture, "organizations"),
        spaces: records(&fixture, "spaces"),
        apps: records(&fixture, "apps"),
    }
}

fn records<E: DeserializeOwned>(fixture: &Value, collection: &str) -> BTreeMap<String, Resource<E>> {
    let Some(entries) = fixture.get(collection).and_then(Value::as_array) else {
        return BTreeMap::new();
    };
    entries
        .iter()
        .map(|entry| {
            let guid = entry[0].as_str().unwrap().to_owned();
            let record = serde_json::from_value(json!({
                "metadata": {"guid": guid},
                "entity": entry[1]
            }))
            .unwrap();
            (guid, record)
        })
        .collect()
}
