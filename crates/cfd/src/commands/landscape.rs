//! `cfd landscape` command implementation.

use std::path::PathBuf;

use cfd_diagrams::{LandscapeDiagramService, LandscapeOptions};
use clap::Args;

use super::connection::{ConnectionArgs, require_cloudfoundry, write_diagram};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the landscape command.
#[derive(Args)]
pub(crate) struct LandscapeArgs {
    /// Write the diagram to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Include organization quota definitions.
    #[arg(long)]
    include_quotas: bool,

    #[command(flatten)]
    pub(crate) connection: ConnectionArgs,
}

impl LandscapeArgs {
    /// Execute the landscape command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, fetching or rendering fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self
            .connection
            .load(self.include_quotas.then_some(true))?;
        let cf = require_cloudfoundry(&config, &output)?;

        output.info(&format!("Fetching landscape from {}...", cf.api_url));
        let diagram = LandscapeDiagramService::new(Some(cf))?
            .with_options(LandscapeOptions {
                include_quotas: config.diagram.include_quotas,
            })
            .render()?;

        write_diagram(&diagram, self.output.as_deref(), &output)
    }
}
