//! Cloud Controller resource types.
//!
//! The v2 API wraps every record in a `{metadata, entity}` envelope. The
//! fetcher keeps the entity untyped ([`RawResource`]); decoders turn it into
//! one of the typed aliases ([`App`], [`Space`], ...).

mod app;
mod buildpack;
mod info;
mod organization;
mod quota_definition;
mod space;
mod stack;
pub mod v3;

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub use app::AppEntity;
pub use buildpack::BuildpackEntity;
pub use info::{AccessToken, V2Info};
pub use organization::OrganizationEntity;
pub use quota_definition::QuotaDefinitionEntity;
pub use space::SpaceEntity;
pub use stack::StackEntity;

/// Resource metadata shared by all v2 records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metadata {
    /// Platform-assigned unique identifier.
    pub guid: String,
    /// API path of the resource itself.
    #[serde(default)]
    pub url: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp, `null` if never updated.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A v2 resource envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<E> {
    /// Resource metadata.
    pub metadata: Metadata,
    /// Resource payload.
    pub entity: E,
}

impl<E> Resource<E> {
    /// Resource GUID.
    pub fn guid(&self) -> &str {
        &self.metadata.guid
    }
}

/// Envelope with the payload still undecoded.
pub type RawResource = Resource<serde_json::Value>;

/// Application record.
pub type App = Resource<AppEntity>;
/// Space record.
pub type Space = Resource<SpaceEntity>;
/// Organization record.
pub type Organization = Resource<OrganizationEntity>;
/// Stack record.
pub type Stack = Resource<StackEntity>;
/// Buildpack record.
pub type Buildpack = Resource<BuildpackEntity>;
/// Organization quota definition record.
pub type QuotaDefinition = Resource<QuotaDefinitionEntity>;

/// One page of a v2 collection response.
#[derive(Debug, Deserialize)]
pub struct ResourcePage {
    /// Total number of resources across all pages.
    #[serde(default)]
    pub total_results: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u64,
    /// Relative URL of the previous page.
    #[serde(default)]
    pub prev_url: Option<String>,
    /// Relative URL of the next page, `null` on the last page.
    #[serde(default)]
    pub next_url: Option<String>,
    /// Resources on this page.
    #[serde(default)]
    pub resources: Vec<RawResource>,
}

impl ResourcePage {
    /// Next page URL, treating `null` and `""` alike.
    pub fn next_page(&self) -> Option<&str> {
        self.next_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Resource collections known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    App,
    Space,
    Organization,
    Stack,
    Buildpack,
    QuotaDefinition,
}

impl ResourceKind {
    /// Collection path of the v2 API.
    pub fn path(self) -> &'static str {
        match self {
            Self::App => "/v2/apps",
            Self::Space => "/v2/spaces",
            Self::Organization => "/v2/organizations",
            Self::Stack => "/v2/stacks",
            Self::Buildpack => "/v2/buildpacks",
            Self::QuotaDefinition => "/v2/quota_definitions",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::App => "app",
            Self::Space => "space",
            Self::Organization => "organization",
            Self::Stack => "stack",
            Self::Buildpack => "buildpack",
            Self::QuotaDefinition => "quota definition",
        };
        f.write_str(name)
    }
}

/// Typed payload of a v2 resource.
///
/// Ties a payload type to the collection it is listed from, so a single
/// generic fetch-and-decode routine serves every resource type.
pub trait Entity: DeserializeOwned {
    /// Collection this entity is listed from.
    const KIND: ResourceKind;

    /// Display name.
    fn name(&self) -> &str;
}
