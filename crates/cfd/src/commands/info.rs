//! `cfd info` command implementation.

use cfd_cloudfoundry::CloudController;
use cfd_cloudfoundry::types::V2Info;
use clap::Args;

use super::connection::{ConnectionArgs, require_cloudfoundry};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the info command.
#[derive(Args)]
pub(crate) struct InfoArgs {
    #[command(flatten)]
    pub(crate) connection: ConnectionArgs,
}

impl InfoArgs {
    /// Execute the info command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the request fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = self.connection.load(None)?;
        let cf = require_cloudfoundry(&config, &output)?;

        let controller = CloudController::new(cf)?;
        let info = controller.info()?;

        print_info(&output, controller.api_url().as_str(), &info);
        Ok(())
    }
}

fn print_info(output: &Output, api_url: &str, info: &V2Info) {
    output.highlight(&format!("\n{}", display_or_dash(&info.name)));
    output.info(&format!("API endpoint:   {api_url}"));
    output.info(&format!("API version:    {}", display_or_dash(&info.api_version)));
    output.info(&format!(
        "Authorization:  {}",
        display_or_dash(&info.authorization_endpoint)
    ));
    if !info.description.is_empty() {
        output.info(&format!("Description:    {}", info.description));
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
