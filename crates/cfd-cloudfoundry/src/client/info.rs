//! API info operation.

use tracing::info;

use super::CloudController;
use crate::error::CloudFoundryError;
use crate::types::V2Info;

impl CloudController {
    /// Get general API info, including the authorization endpoint.
    ///
    /// Does not require a login.
    pub fn info(&self) -> Result<V2Info, CloudFoundryError> {
        let url = self.endpoint("/v2/info")?;
        let info: V2Info = self.get_json(&url, false)?;
        info!(
            "Cloud Controller {} (API {}) at {}",
            info.name, info.api_version, self.api_url
        );
        Ok(info)
    }
}
