//! Configuration management for cfdiagram.
//!
//! Parses `cfd.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `cloudfoundry.api_url`
//! - `cloudfoundry.username`
//! - `cloudfoundry.password`

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cfd.toml";

/// Default page size for Cloud Controller collection requests.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 100;

/// Largest page size the Cloud Controller v2 API accepts.
pub const MAX_RESULTS_PER_PAGE: u32 = 100;

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Cloud Controller API URL.
    pub api_url: Option<String>,
    /// Override login username.
    pub username: Option<String>,
    /// Override login password.
    pub password: Option<String>,
    /// Override TLS certificate verification skipping.
    pub skip_ssl_validation: Option<bool>,
    /// Override quota rendering in the landscape diagram.
    pub include_quotas: Option<bool>,
}

impl CliSettings {
    fn has_cloudfoundry_overrides(&self) -> bool {
        self.api_url.is_some()
            || self.username.is_some()
            || self.password.is_some()
            || self.skip_ssl_validation.is_some()
    }
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cloud Controller connection settings.
    pub cloudfoundry: Option<CloudFoundryConfig>,
    /// Diagram rendering options.
    pub diagram: DiagramConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Cloud Controller connection settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct CloudFoundryConfig {
    /// Cloud Controller API base URL (e.g. `https://api.example.com`).
    pub api_url: String,
    /// Username for the password grant.
    pub username: String,
    /// Password for the password grant.
    pub password: String,
    /// Disable TLS certificate verification (self-signed development platforms).
    pub skip_ssl_validation: bool,
    /// Global HTTP timeout per request, in seconds.
    pub timeout_secs: u64,
    /// Page size requested from collection endpoints.
    pub results_per_page: u32,
}

impl CloudFoundryConfig {
    /// Create a config with default transport settings.
    #[must_use]
    pub fn new(api_url: &str, username: &str, password: &str) -> Self {
        Self {
            api_url: api_url.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            ..Self::default()
        }
    }

    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.username, "cloudfoundry.username")?;
        require_non_empty(&self.password, "cloudfoundry.password")?;
        require_non_empty(&self.api_url, "cloudfoundry.api_url")?;
        require_http_url(&self.api_url, "cloudfoundry.api_url")?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "cloudfoundry.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if self.results_per_page == 0 || self.results_per_page > MAX_RESULTS_PER_PAGE {
            return Err(ConfigError::Validation(format!(
                "cloudfoundry.results_per_page must be between 1 and {MAX_RESULTS_PER_PAGE}"
            )));
        }
        Ok(())
    }
}

impl Default for CloudFoundryConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            username: String::new(),
            password: String::new(),
            skip_ssl_validation: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
        }
    }
}

impl fmt::Debug for CloudFoundryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudFoundryConfig")
            .field("api_url", &self.api_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("skip_ssl_validation", &self.skip_ssl_validation)
            .field("timeout_secs", &self.timeout_secs)
            .field("results_per_page", &self.results_per_page)
            .finish()
    }
}

/// Diagram rendering options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Render organization quota definitions in the landscape diagram.
    pub include_quotas: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`cloudfoundry.password`").
        field: String,
        /// Error message (e.g., "${`CF_PASSWORD`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `cfd.toml` in current directory and parents.
    /// Without any file, an empty configuration is used so CLI settings and
    /// environment variables alone can drive a run.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// Creates the `[cloudfoundry]` section when the CLI supplies connection
    /// settings but the file has none.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if settings.has_cloudfoundry_overrides() {
            let cf = self
                .cloudfoundry
                .get_or_insert_with(CloudFoundryConfig::default);
            if let Some(api_url) = &settings.api_url {
                cf.api_url.clone_from(api_url);
            }
            if let Some(username) = &settings.username {
                cf.username.clone_from(username);
            }
            if let Some(password) = &settings.password {
                cf.password.clone_from(password);
            }
            if let Some(skip) = settings.skip_ssl_validation {
                cf.skip_ssl_validation = skip;
            }
        }
        if let Some(include_quotas) = settings.include_quotas {
            self.diagram.include_quotas = include_quotas;
        }
    }

    /// Get validated Cloud Controller configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_cloudfoundry(&self) -> Result<&CloudFoundryConfig, ConfigError> {
        let cf = self.cloudfoundry.as_ref().ok_or_else(|| {
            ConfigError::Validation("[cloudfoundry] section required in config".into())
        })?;
        cf.validate()?;
        Ok(cf)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref mut cf) = self.cloudfoundry {
            cf.api_url = expand::expand_env(&cf.api_url, "cloudfoundry.api_url")?;
            cf.username = expand::expand_env(&cf.username, "cloudfoundry.username")?;
            cf.password = expand::expand_env(&cf.password, "cloudfoundry.password")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_cf() -> CloudFoundryConfig {
        CloudFoundryConfig::new("https://api.example.com", "cloudmaster", "cloudpass")
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.cloudfoundry.is_none());
        assert!(!config.diagram.include_quotas);
    }

    #[test]
    fn test_parse_cloudfoundry_config() {
        let toml = r#"
[cloudfoundry]
api_url = "https://api.example.com"
username = "cloudmaster"
password = "cloudpass"
skip_ssl_validation = false
timeout_secs = 10
results_per_page = 50

[diagram]
include_quotas = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let cf = config.cloudfoundry.unwrap();
        assert_eq!(cf.api_url, "https://api.example.com");
        assert_eq!(cf.username, "cloudmaster");
        assert_eq!(cf.password, "cloudpass");
        assert!(!cf.skip_ssl_validation);
        assert_eq!(cf.timeout_secs, 10);
        assert_eq!(cf.results_per_page, 50);
        assert!(config.diagram.include_quotas);
    }

    #[test]
    fn test_cloudfoundry_defaults() {
        let toml = r#"
[cloudfoundry]
api_url = "https://api.example.com"
username = "u"
password = "p"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let cf = config.cloudfoundry.unwrap();
        assert!(cf.skip_ssl_validation);
        assert_eq!(cf.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cf.results_per_page, DEFAULT_RESULTS_PER_PAGE);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(valid_cf().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_username() {
        let cf = CloudFoundryConfig {
            username: String::new(),
            ..valid_cf()
        };
        let err = cf.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: cloudfoundry.username cannot be empty"
        );
    }

    #[test]
    fn test_validate_missing_password() {
        let cf = CloudFoundryConfig {
            password: String::new(),
            ..valid_cf()
        };
        let err = cf.validate().unwrap_err();
        assert!(err.to_string().contains("cloudfoundry.password cannot be empty"));
    }

    #[test]
    fn test_validate_missing_api_url() {
        let cf = CloudFoundryConfig {
            api_url: String::new(),
            ..valid_cf()
        };
        let err = cf.validate().unwrap_err();
        assert!(err.to_string().contains("cloudfoundry.api_url cannot be empty"));
    }

    #[test]
    fn test_validate_malformed_api_url() {
        let cf = CloudFoundryConfig {
            api_url: ":8080/hhh//".to_owned(),
            ..valid_cf()
        };
        let err = cf.validate().unwrap_err();
        assert!(err.to_string().contains("must start with http:// or https://"));
    }

    #[test]
    fn test_validate_results_per_page_range() {
        for results_per_page in [0, MAX_RESULTS_PER_PAGE + 1] {
            let cf = CloudFoundryConfig {
                results_per_page,
                ..valid_cf()
            };
            let err = cf.validate().unwrap_err();
            assert!(err.to_string().contains("results_per_page"));
        }
    }

    #[test]
    fn test_validate_zero_timeout() {
        let cf = CloudFoundryConfig {
            timeout_secs: 0,
            ..valid_cf()
        };
        assert!(cf.validate().unwrap_err().to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_require_cloudfoundry_missing_section() {
        let config = Config::default();
        let err = config.require_cloudfoundry().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[cloudfoundry]"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", valid_cf());
        assert!(debug.contains("cloudmaster"));
        assert!(!debug.contains("cloudpass"));
    }

    #[test]
    fn test_apply_cli_settings_creates_section() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            api_url: Some("https://api.example.com".to_owned()),
            username: Some("cloudmaster".to_owned()),
            password: Some("cloudpass".to_owned()),
            ..Default::default()
        });

        let cf = config.require_cloudfoundry().unwrap();
        assert_eq!(cf.api_url, "https://api.example.com");
        assert!(cf.skip_ssl_validation);
    }

    #[test]
    fn test_apply_cli_settings_overrides_file_values() {
        let mut config = Config {
            cloudfoundry: Some(valid_cf()),
            ..Default::default()
        };
        config.apply_cli_settings(&CliSettings {
            password: Some("other".to_owned()),
            skip_ssl_validation: Some(false),
            include_quotas: Some(true),
            ..Default::default()
        });

        let cf = config.cloudfoundry.as_ref().unwrap();
        assert_eq!(cf.username, "cloudmaster"); // Unchanged
        assert_eq!(cf.password, "other");
        assert!(!cf.skip_ssl_validation);
        assert!(config.diagram.include_quotas);
    }

    #[test]
    fn test_apply_cli_settings_empty_keeps_section_absent() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert!(config.cloudfoundry.is_none());
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/cfd.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_expands_env() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CFD_TEST_LOAD_PASSWORD", "from-env");
        }
        let file = write_config(
            r#"
[cloudfoundry]
api_url = "https://api.example.com"
username = "cloudmaster"
password = "${CFD_TEST_LOAD_PASSWORD}"
"#,
        );

        let config = Config::load(Some(file.path()), None).unwrap();
        unsafe {
            std::env::remove_var("CFD_TEST_LOAD_PASSWORD");
        }

        assert_eq!(config.config_path.as_deref(), Some(file.path()));
        assert_eq!(config.require_cloudfoundry().unwrap().password, "from-env");
    }

    #[test]
    fn test_load_from_file_parse_error() {
        let file = write_config("[cloudfoundry\napi_url = ");
        let err = Config::load(Some(file.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
