//! CLI error types.

use cfd_cloudfoundry::CloudFoundryError;
use cfd_config::ConfigError;
use cfd_diagrams::DiagramError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    CloudFoundry(#[from] CloudFoundryError),

    #[error("{0}")]
    Diagram(#[from] DiagramError),

    #[error("{0}")]
    Validation(String),
}
