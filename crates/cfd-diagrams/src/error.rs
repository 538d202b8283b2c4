//! Diagram service error types.

use cfd_cloudfoundry::CloudFoundryError;
use cfd_plantuml::RenderError;

/// Error during diagram generation.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// Service constructed without configuration.
    #[error("{0}")]
    Config(String),

    /// Invalid argument.
    #[error("{0}")]
    Validation(String),

    /// The requested app does not exist.
    #[error("app '{0}' not found")]
    AppNotFound(String),

    #[error(transparent)]
    CloudFoundry(#[from] CloudFoundryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
