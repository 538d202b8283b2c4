//! Error types for the Cloud Controller client.

use cfd_config::ConfigError;

use crate::types::ResourceKind;

/// Error from Cloud Controller API operations.
#[derive(Debug, thiserror::Error)]
pub enum CloudFoundryError {
    /// Invalid controller configuration.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// URL could not be parsed or resolved.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed (network error, timeout, TLS, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} from {url} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not the expected JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A resource payload could not be decoded into its typed entity.
    #[error("failed to decode {kind} {guid}: {source}")]
    Decode {
        /// Resource type being decoded.
        kind: ResourceKind,
        /// GUID of the offending resource.
        guid: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// Password grant against the authorization endpoint failed.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A request needing a bearer token was made before logging in.
    #[error("not logged in: call login() before requesting resources")]
    NotAuthenticated,

    /// Collection paging did not terminate.
    #[error("pagination error: {0}")]
    Pagination(String),
}

impl CloudFoundryError {
    /// Whether the platform answered with `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpResponse { status: 404, .. })
    }
}
