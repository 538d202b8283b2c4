//! Options shared by every command that talks to a Cloud Controller.

use std::io::Write;
use std::path::{Path, PathBuf};

use cfd_config::{CliSettings, CloudFoundryConfig, Config};
use clap::Args;
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// Connection and configuration options.
#[derive(Args)]
pub(crate) struct ConnectionArgs {
    /// Path to configuration file (default: auto-discover cfd.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Cloud Controller API URL (overrides config).
    #[arg(long, env = "CF_API")]
    pub(crate) api_url: Option<String>,

    /// Login username (overrides config).
    #[arg(long, env = "CF_USERNAME")]
    pub(crate) username: Option<String>,

    /// Login password (overrides config).
    #[arg(long, env = "CF_PASSWORD", hide_env_values = true)]
    pub(crate) password: Option<String>,

    /// Verify TLS certificates of the Cloud Controller and UAA.
    #[arg(long)]
    pub(crate) verify_ssl: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ConnectionArgs {
    /// CLI overrides for [`Config::load`].
    pub(crate) fn settings(&self) -> CliSettings {
        CliSettings {
            api_url: self.api_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            skip_ssl_validation: self.verify_ssl.then_some(false),
            include_quotas: None,
        }
    }

    /// Load configuration with these overrides applied on top.
    pub(crate) fn load(&self, include_quotas: Option<bool>) -> Result<Config, CliError> {
        let settings = CliSettings {
            include_quotas,
            ..self.settings()
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        debug!(path = ?config.config_path, "Configuration loaded");
        Ok(config)
    }
}

/// Get the validated `[cloudfoundry]` section, explaining how to add it.
pub(crate) fn require_cloudfoundry<'a>(
    config: &'a Config,
    output: &Output,
) -> Result<&'a CloudFoundryConfig, CliError> {
    if config.cloudfoundry.is_none() {
        output.error("Error: cloudfoundry configuration required in cfd.toml");
        output.info("\nAdd the following to your cfd.toml:");
        output.info("\n[cloudfoundry]");
        output.info(r#"api_url = "https://api.example.com""#);
        output.info(r#"username = "admin""#);
        output.info(r#"password = "${CF_PASSWORD}""#);
        output.info("\nor pass --api-url, --username and --password.");
        return Err(CliError::Validation(
            "cloudfoundry configuration required".to_owned(),
        ));
    }

    let cf = config.require_cloudfoundry()?;
    if cf.skip_ssl_validation {
        output.warning("TLS certificate verification is disabled (use --verify-ssl to enable)");
    }
    Ok(cf)
}

/// Write a diagram to `path`, or to stdout if `None`.
pub(crate) fn write_diagram(
    diagram: &str,
    path: Option<&Path>,
    output: &Output,
) -> Result<(), CliError> {
    match path {
        Some(path) => {
            std::fs::write(path, diagram)?;
            output.success(&format!("Diagram written to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(diagram.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn args() -> ConnectionArgs {
        ConnectionArgs {
            config: None,
            api_url: Some("https://api.example.com".to_owned()),
            username: Some("admin".to_owned()),
            password: Some("secret".to_owned()),
            verify_ssl: false,
            verbose: false,
        }
    }

    #[test]
    fn test_settings_leave_ssl_default_untouched() {
        let settings = args().settings();

        assert_eq!(settings.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(settings.skip_ssl_validation, None);
    }

    #[test]
    fn test_settings_verify_ssl() {
        let settings = ConnectionArgs {
            verify_ssl: true,
            ..args()
        }
        .settings();

        assert_eq!(settings.skip_ssl_validation, Some(false));
    }

    #[test]
    fn test_load_with_cli_overrides_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfd.toml");
        std::fs::write(&path, "").unwrap();

        let config = ConnectionArgs {
            config: Some(path),
            ..args()
        }
        .load(Some(true))
        .unwrap();

        let cf = config.require_cloudfoundry().unwrap();
        assert_eq!(cf.api_url, "https://api.example.com");
        assert_eq!(cf.username, "admin");
        assert!(cf.skip_ssl_validation);
        assert!(config.diagram.include_quotas);
    }

    #[test]
    fn test_load_missing_config_file() {
        let dir = TempDir::new().unwrap();

        let err = ConnectionArgs {
            config: Some(dir.path().join("missing.toml")),
            ..args()
        }
        .load(None)
        .unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_require_cloudfoundry_missing_section() {
        let err = require_cloudfoundry(&Config::default(), &Output::new()).unwrap_err();

        assert_eq!(err.to_string(), "cloudfoundry configuration required");
    }

    #[test]
    fn test_write_diagram_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("landscape.puml");

        write_diagram("@startuml\n@enduml\n", Some(&path), &Output::new()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "@startuml\n@enduml\n"
        );
    }
}
