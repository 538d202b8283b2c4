//! `cfd app` command implementation.

use std::path::PathBuf;

use cfd_diagrams::SingleAppDiagramService;
use clap::Args;

use super::connection::{ConnectionArgs, require_cloudfoundry, write_diagram};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the app command.
#[derive(Args)]
pub(crate) struct AppArgs {
    /// GUID of the app to render.
    app_guid: String,

    /// Write the diagram to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) connection: ConnectionArgs,
}

impl AppArgs {
    /// Execute the app command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, fetching or rendering fails, or if
    /// the app does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.connection.load(None)?;
        let cf = require_cloudfoundry(&config, &output)?;

        output.info(&format!("Fetching app {}...", self.app_guid));
        let diagram = SingleAppDiagramService::new(Some(cf))?.render(&self.app_guid)?;

        write_diagram(&diagram, self.output.as_deref(), &output)
    }
}
