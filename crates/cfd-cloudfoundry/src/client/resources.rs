//! Paginated collection fetching for the v2 API.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use super::CloudController;
use crate::decode::decode_resources;
use crate::error::CloudFoundryError;
use crate::types::{
    App, AppEntity, Buildpack, BuildpackEntity, Entity, Organization, OrganizationEntity,
    QuotaDefinition, QuotaDefinitionEntity, RawResource, Resource, ResourcePage, Space,
    SpaceEntity, Stack, StackEntity,
};

impl CloudController {
    /// Fetch every page of a v2 collection.
    ///
    /// Follows `next_url` until the last page and returns the union of all
    /// pages keyed by GUID. An empty collection yields an empty map. Any
    /// failure aborts the fetch without partial results.
    pub fn fetch_resources(
        &self,
        path: &str,
    ) -> Result<BTreeMap<String, RawResource>, CloudFoundryError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("results-per-page", &self.results_per_page.to_string());

        let mut resources = BTreeMap::new();
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(url.to_string()) {
                return Err(CloudFoundryError::Pagination(format!(
                    "{path}: next page {url} was already fetched"
                )));
            }

            let page: ResourcePage = self.get_json(&url, true)?;
            debug!(
                "Fetched page {} of {} for {} ({} resources)",
                visited.len(),
                page.total_pages,
                path,
                page.resources.len()
            );

            let next = page.next_page().map(|next| self.endpoint(next)).transpose()?;
            for resource in page.resources {
                resources.insert(resource.metadata.guid.clone(), resource);
            }

            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        info!("Fetched {} resources from {}", resources.len(), path);
        Ok(resources)
    }

    /// Fetch and decode a whole collection.
    pub fn list<E: Entity>(&self) -> Result<BTreeMap<String, Resource<E>>, CloudFoundryError> {
        decode_resources(self.fetch_resources(E::KIND.path())?)
    }

    /// All apps visible to the user.
    pub fn apps(&self) -> Result<BTreeMap<String, App>, CloudFoundryError> {
        self.list::<AppEntity>()
    }

    /// All spaces visible to the user.
    pub fn spaces(&self) -> Result<BTreeMap<String, Space>, CloudFoundryError> {
        self.list::<SpaceEntity>()
    }

    /// All organizations visible to the user.
    pub fn organizations(&self) -> Result<BTreeMap<String, Organization>, CloudFoundryError> {
        self.list::<OrganizationEntity>()
    }

    /// All stacks.
    pub fn stacks(&self) -> Result<BTreeMap<String, Stack>, CloudFoundryError> {
        self.list::<StackEntity>()
    }

    /// All buildpacks.
    pub fn buildpacks(&self) -> Result<BTreeMap<String, Buildpack>, CloudFoundryError> {
        self.list::<BuildpackEntity>()
    }

    /// All organization quota definitions.
    pub fn quota_definitions(
        &self,
    ) -> Result<BTreeMap<String, QuotaDefinition>, CloudFoundryError> {
        self.list::<QuotaDefinitionEntity>()
    }
}
