//! UAA password-grant login.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::info;
use url::{Url, form_urlencoded};

use super::{CloudController, read_response};
use crate::error::CloudFoundryError;
use crate::types::AccessToken;

/// Public OAuth client of the cf CLI (empty secret).
const CLIENT_ID: &str = "cf";

/// Token path relative to the authorization endpoint.
const TOKEN_PATH: &str = "/oauth/token";

impl CloudController {
    /// Log in with the configured username and password.
    ///
    /// Discovers the authorization endpoint from `/v2/info`, exchanges the
    /// credentials for a bearer token and keeps it for subsequent requests.
    /// The token is not refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`CloudFoundryError::Authentication`] if any step fails.
    pub fn login(&mut self) -> Result<&AccessToken, CloudFoundryError> {
        let info = self.info().map_err(|e| {
            CloudFoundryError::Authentication(format!(
                "unable to discover authorization endpoint: {e}"
            ))
        })?;

        let token_url = Url::parse(&info.authorization_endpoint)
            .and_then(|endpoint| endpoint.join(TOKEN_PATH))
            .map_err(|e| {
                CloudFoundryError::Authentication(format!(
                    "invalid authorization endpoint '{}': {e}",
                    info.authorization_endpoint
                ))
            })?;

        info!("Logging in to {} as {}", token_url, self.username);

        let response = self
            .agent
            .post(token_url.as_str())
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Authorization", &basic_auth(CLIENT_ID, ""))
            .send(password_grant_body(&self.username, &self.password).as_bytes())
            .map_err(|e| CloudFoundryError::Authentication(format!("token request failed: {e}")))?;

        let body = read_response(&token_url, response).map_err(|e| {
            CloudFoundryError::Authentication(format!("token request rejected: {e}"))
        })?;
        let token: AccessToken = serde_json::from_str(&body).map_err(|e| {
            CloudFoundryError::Authentication(format!("invalid token response: {e}"))
        })?;

        info!("Logged in (token expires in {}s)", token.expires_in);
        Ok(self.access_token.insert(token))
    }
}

/// Form body of the password grant, keys in sorted order.
fn password_grant_body(username: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("grant_type", "password")
        .append_pair("password", password)
        .append_pair("scope", "")
        .append_pair("username", username)
        .finish()
}

/// `Authorization` header value for HTTP Basic auth.
fn basic_auth(client_id: &str, secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{client_id}:{secret}")))
}
