//! Landscape diagram service.

use std::collections::BTreeMap;

use cfd_cloudfoundry::{CloudController, Landscape};
use cfd_config::CloudFoundryConfig;
use cfd_plantuml::{LandscapeOptions, render_landscape};
use tracing::info;

use crate::{DiagramError, connect, require_config};

/// Renders the whole platform.
pub struct LandscapeDiagramService {
    config: CloudFoundryConfig,
    options: LandscapeOptions,
}

impl LandscapeDiagramService {
    /// Create a service for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Config`] if `config` is `None`.
    pub fn new(config: Option<&CloudFoundryConfig>) -> Result<Self, DiagramError> {
        Ok(Self {
            config: require_config(config)?,
            options: LandscapeOptions::default(),
        })
    }

    /// Replace the rendering options.
    #[must_use]
    pub fn with_options(mut self, options: LandscapeOptions) -> Self {
        self.options = options;
        self
    }

    /// Log in, fetch the collections and render the landscape diagram.
    ///
    /// # Errors
    ///
    /// Returns an error if login or any fetch fails, or if a record references
    /// a resource that was not returned.
    pub fn render(&self) -> Result<String, DiagramError> {
        let controller = connect(&self.config)?;
        let landscape = fetch_landscape(&controller, &self.options)?;
        Ok(render_landscape(&landscape, &self.options)?)
    }
}

/// Fetch the collections rendered with `options` into a [`Landscape`].
///
/// Quota definitions are only requested when `include_quotas` is set.
///
/// # Errors
///
/// Returns the first fetch or decode error.
pub fn fetch_landscape(
    controller: &CloudController,
    options: &LandscapeOptions,
) -> Result<Landscape, DiagramError> {
    let quota_definitions = if options.include_quotas {
        controller.quota_definitions()?
    } else {
        BTreeMap::new()
    };
    let landscape = Landscape {
        stacks: controller.stacks()?,
        buildpacks: controller.buildpacks()?,
        quota_definitions,
        organizations: controller.organizations()?,
        spaces: controller.spaces()?,
        apps: controller.apps()?,
    };
    info!(
        organizations = landscape.organizations.len(),
        spaces = landscape.spaces.len(),
        apps = landscape.apps.len(),
        "Fetched landscape"
    );
    Ok(landscape)
}

#[cfg(test)]
mod tests {
    use cfd_cloudfoundry::mock::{MockCloudController, page, resource};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn platform() -> MockCloudController {
        let mock = MockCloudController::start();
        mock.on_get(
            "/v2/stacks",
            &page(&[resource("st-1", json!({"name": "cflinuxfs3"}))], None),
        );
        mock.on_get(
            "/v2/buildpacks",
            &page(
                &[resource("bp-1", json!({"name": "java_buildpack", "stack": "cflinuxfs3"}))],
                None,
            ),
        );
        mock.on_get(
            "/v2/quota_definitions",
            &page(&[resource("q-1", json!({"name": "default"}))], None),
        );
        mock.on_get(
            "/v2/organizations",
            &page(
                &[resource("o-1", json!({"name": "org", "quota_definition_guid": "q-1"}))],
                None,
            ),
        );
        mock.on_get(
            "/v2/spaces",
            &page(
                &[resource("s-1", json!({"name": "dev", "organization_guid": "o-1"}))],
                None,
            ),
        );
        mock.on_get(
            "/v2/apps",
            &page(
                &[resource(
                    "a-1",
                    json!({"name": "my-app", "space_guid": "s-1", "detected_buildpack_guid": "bp-1"}),
                )],
                None,
            ),
        );
        mock
    }

    #[test]
    fn test_new_without_config() {
        let err = LandscapeDiagramService::new(None).err().unwrap();

        assert!(matches!(err, DiagramError::Config(_)));
        assert_eq!(
            err.to_string(),
            "a non empty config must be provided to a diagram service"
        );
    }

    #[test]
    fn test_render_against_mock() {
        let mock = platform();
        let config = CloudFoundryConfig::new(&mock.url(), "user", "pass");

        let diagram = LandscapeDiagramService::new(Some(&config))
            .unwrap()
            .render()
            .unwrap();

        assert!(diagram.starts_with("@startuml\n"));
        assert!(diagram.ends_with("@enduml\n"));
        assert!(diagram.contains("[cflinuxfs3] <<stack>> as st1\n"));
        assert!(diagram.contains("bp1 --> st1\n"));
        assert!(diagram.contains("o1 --> s1\n"));
        assert!(diagram.contains("s1 --> a1\n"));
        assert!(diagram.contains("a1 --> bp1\n"));
        assert!(!diagram.contains("<<quota>>"));

        let requests = mock.requests();
        let apps = requests
            .iter()
            .find(|r| r.url.starts_with("/v2/apps"))
            .unwrap();
        assert_eq!(
            apps.header("Authorization"),
            Some("Bearer eyhuetzligruetzli")
        );
    }

    #[test]
    fn test_render_with_quotas() {
        let mock = platform();
        let config = CloudFoundryConfig::new(&mock.url(), "user", "pass");

        let diagram = LandscapeDiagramService::new(Some(&config))
            .unwrap()
            .with_options(LandscapeOptions {
                include_quotas: true,
            })
            .render()
            .unwrap();

        assert!(diagram.contains("[default] <<quota>> as q1\n"));
        assert!(diagram.contains("o1 --> q1\n"));
    }

    #[test]
    fn test_quotas_not_fetched_unless_rendered() {
        let mock = platform();
        mock.respond("GET", "/v2/quota_definitions", 500, r#"{"description":"boom"}"#);
        let config = CloudFoundryConfig::new(&mock.url(), "user", "pass");

        let diagram = LandscapeDiagramService::new(Some(&config))
            .unwrap()
            .render()
            .unwrap();

        assert!(diagram.contains("o1 --> s1\n"));
        assert!(
            !mock
                .requests()
                .iter()
                .any(|r| r.url.starts_with("/v2/quota_definitions"))
        );
    }

    #[test]
    fn test_fetch_error_propagates() {
        let mock = platform();
        mock.respond("GET", "/v2/spaces", 500, r#"{"description":"boom"}"#);
        let config = CloudFoundryConfig::new(&mock.url(), "user", "pass");

        let err = LandscapeDiagramService::new(Some(&config))
            .unwrap()
            .render()
            .unwrap_err();

        assert!(matches!(
            err,
            DiagramError::CloudFoundry(cfd_cloudfoundry::CloudFoundryError::HttpResponse {
                status: 500,
                ..
            })
        ));
    }

    #[test]
    fn test_login_failure() {
        let mock = platform();
        mock.respond("POST", "/oauth/token", 401, r#"{"error":"unauthorized"}"#);
        let config = CloudFoundryConfig::new(&mock.url(), "user", "wrong");

        let err = LandscapeDiagramService::new(Some(&config))
            .unwrap()
            .render()
            .unwrap_err();

        assert!(err.to_string().starts_with("authentication failed"));
    }
}
