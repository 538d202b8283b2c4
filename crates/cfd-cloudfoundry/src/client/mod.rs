//! Cloud Controller REST API client.
//!
//! Provides a sync HTTP client for the v2/v3 Cloud Controller API with
//! UAA password-grant authentication.

mod apps;
mod auth;
mod info;
mod resources;

use std::time::Duration;

use cfd_config::CloudFoundryConfig;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use ureq::http::Response;
use ureq::tls::TlsConfig;
use ureq::{Agent, Body};
use url::Url;

use crate::error::CloudFoundryError;
use crate::types::AccessToken;

/// Cloud Controller REST API client.
///
/// Holds the connection settings and, after [`login`](Self::login), the
/// bearer token. Fetched resources are returned to the caller, never stored
/// here.
pub struct CloudController {
    agent: Agent,
    api_url: Url,
    username: String,
    password: String,
    results_per_page: u32,
    access_token: Option<AccessToken>,
}

impl CloudController {
    /// Create an unauthenticated client from config values.
    ///
    /// # Errors
    ///
    /// Returns [`CloudFoundryError::Config`] if a required field is missing and
    /// [`CloudFoundryError::InvalidUrl`] if the API URL cannot be parsed.
    pub fn new(config: &CloudFoundryConfig) -> Result<Self, CloudFoundryError> {
        config.validate()?;
        let api_url = Url::parse(&config.api_url)?;

        let mut agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false);
        if config.skip_ssl_validation {
            warn!("TLS certificate verification disabled for {}", api_url);
            agent_config =
                agent_config.tls_config(TlsConfig::builder().disable_verification(true).build());
        }

        Ok(Self {
            agent: agent_config.build().into(),
            api_url,
            username: config.username.clone(),
            password: config.password.clone(),
            results_per_page: config.results_per_page,
            access_token: None,
        })
    }

    /// Get the API base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Token obtained by the last successful login.
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Resolve an absolute API path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, CloudFoundryError> {
        Ok(self.api_url.join(path)?)
    }

    /// `Authorization` header value for signed requests.
    fn bearer(&self) -> Result<String, CloudFoundryError> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token.access_token))
            .ok_or(CloudFoundryError::NotAuthenticated)
    }

    /// GET a JSON document, signed with the bearer token when `signed` is set.
    fn get_json<T: DeserializeOwned>(&self, url: &Url, signed: bool) -> Result<T, CloudFoundryError> {
        debug!("GET {}", url);

        let mut request = self
            .agent
            .get(url.as_str())
            .header("Accept", "application/json");
        if signed {
            request = request.header("Authorization", &self.bearer()?);
        }

        let body = read_response(url, request.call()?)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Read a response body, turning error statuses into [`CloudFoundryError::HttpResponse`].
fn read_response(url: &Url, response: Response<Body>) -> Result<String, CloudFoundryError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(CloudFoundryError::HttpResponse {
            status,
            url: url.to_string(),
            body: error_body,
        });
    }

    Ok(body_reader.read_to_string()?)
}
