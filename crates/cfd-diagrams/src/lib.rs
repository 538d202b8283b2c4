//! Diagram services for cfdiagram.
//!
//! Each service owns a copy of the Cloud Foundry configuration and runs the
//! whole workflow on `render`:
//!
//! 1. Log in with the configured credentials
//! 2. Fetch the resource collections the diagram needs
//! 3. Compose a [`Landscape`](cfd_cloudfoundry::Landscape)
//! 4. Render `PlantUML` source
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cfd_config::CloudFoundryConfig;
//! use cfd_diagrams::{LandscapeDiagramService, SingleAppDiagramService};
//!
//! let config = CloudFoundryConfig::new("https://api.example.com", "user", "secret");
//!
//! let landscape = LandscapeDiagramService::new(Some(&config))?.render()?;
//! let app = SingleAppDiagramService::new(Some(&config))?
//!     .render("1cb006ee-fb05-47e1-b541-c34179ddc446")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod landscape;
mod single_app;

pub use cfd_plantuml::LandscapeOptions;
pub use error::DiagramError;
pub use landscape::{LandscapeDiagramService, fetch_landscape};
pub use single_app::SingleAppDiagramService;

use cfd_cloudfoundry::CloudController;
use cfd_config::CloudFoundryConfig;

const MISSING_CONFIG: &str = "a non empty config must be provided to a diagram service";

/// Clone `config`, rejecting `None`.
fn require_config(config: Option<&CloudFoundryConfig>) -> Result<CloudFoundryConfig, DiagramError> {
    config
        .cloned()
        .ok_or_else(|| DiagramError::Config(MISSING_CONFIG.to_owned()))
}

/// Create a controller and log in.
fn connect(config: &CloudFoundryConfig) -> Result<CloudController, DiagramError> {
    let mut controller = CloudController::new(config)?;
    controller.login()?;
    Ok(controller)
}
