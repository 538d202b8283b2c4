//! v3 app operations.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::info;

use super::CloudController;
use crate::error::CloudFoundryError;
use crate::types::v3::V3App;

/// Characters escaped when a GUID is used as a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

impl CloudController {
    /// Get a single app from the v3 API.
    ///
    /// # Errors
    ///
    /// A missing app surfaces as [`CloudFoundryError::HttpResponse`] with
    /// status 404 (see [`CloudFoundryError::is_not_found`]).
    pub fn v3_app(&self, guid: &str) -> Result<V3App, CloudFoundryError> {
        let url = self.endpoint(&format!(
            "/v3/apps/{}",
            utf8_percent_encode(guid, PATH_SEGMENT)
        ))?;

        info!("Getting app {}", guid);
        self.get_json(&url, true)
    }
}
