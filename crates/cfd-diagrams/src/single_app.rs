//! Single-app diagram service.

use cfd_cloudfoundry::Landscape;
use cfd_config::CloudFoundryConfig;
use cfd_plantuml::render_single_app;
use tracing::info;

use crate::{DiagramError, connect, require_config};

const MISSING_APP_ID: &str = "a valid id for the app must be provided";

/// Renders one app with its space, organization, buildpacks and stack.
pub struct SingleAppDiagramService {
    config: CloudFoundryConfig,
}

impl SingleAppDiagramService {
    /// Create a service for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Config`] if `config` is `None`.
    pub fn new(config: Option<&CloudFoundryConfig>) -> Result<Self, DiagramError> {
        Ok(Self {
            config: require_config(config)?,
        })
    }

    /// Log in, fetch the app and its context, and render the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Validation`] for an empty `app_guid` (before
    /// any request is made), [`DiagramError::AppNotFound`] if the Cloud
    /// Controller answers `404`, and the first login, fetch or render error
    /// otherwise.
    pub fn render(&self, app_guid: &str) -> Result<String, DiagramError> {
        if app_guid.trim().is_empty() {
            return Err(DiagramError::Validation(MISSING_APP_ID.to_owned()));
        }

        let controller = connect(&self.config)?;

        let app = controller.v3_app(app_guid).map_err(|e| {
            if e.is_not_found() {
                DiagramError::AppNotFound(app_guid.to_owned())
            } else {
                e.into()
            }
        })?;
        info!(app = %app.name, lifecycle = %app.lifecycle.lifecycle_type, "Fetched app");

        let landscape = Landscape {
            organizations: controller.organizations()?,
            spaces: controller.spaces()?,
            stacks: controller.stacks()?,
            buildpacks: controller.buildpacks()?,
            ..Landscape::default()
        };

        Ok(render_single_app(&app, &landscape)?)
    }
}
