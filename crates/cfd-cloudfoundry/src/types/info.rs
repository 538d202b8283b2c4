//! API info and token types.

use std::fmt;

use serde::Deserialize;

/// General info about the v2 Cloud Controller API (`/v2/info`).
#[derive(Debug, Clone, Deserialize)]
pub struct V2Info {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub build: String,
    #[serde(default)]
    pub description: String,
    /// UAA base URL used for the password grant.
    pub authorization_endpoint: String,
    #[serde(default)]
    pub token_endpoint: String,
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub min_cli_version: Option<String>,
    #[serde(default)]
    pub app_ssh_endpoint: Option<String>,
    #[serde(default)]
    pub doppler_logging_endpoint: Option<String>,
    #[serde(default)]
    pub routing_endpoint: Option<String>,
}

/// Token returned by the UAA password grant.
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    /// Bearer token used to sign API requests.
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub jti: String,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("jti", &self.jti)
            .finish_non_exhaustive()
    }
}
