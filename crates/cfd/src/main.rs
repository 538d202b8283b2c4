//! cfd CLI - Cloud Foundry landscape diagrams.
//!
//! Provides commands for:
//! - `landscape`: Render all orgs, spaces, apps, buildpacks and stacks
//! - `app`: Render a single app with its dependencies
//! - `info`: Show Cloud Controller information

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use commands::{AppArgs, InfoArgs, LandscapeArgs};
use output::Output;

/// cfd - PlantUML diagrams of a Cloud Foundry platform.
#[derive(Parser)]
#[command(name = "cfd", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the landscape diagram.
    Landscape(LandscapeArgs),
    /// Render the diagram of a single app.
    App(AppArgs),
    /// Show Cloud Controller information.
    Info(InfoArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Landscape(args) => args.connection.verbose,
            Self::App(args) => args.connection.verbose,
            Self::Info(args) => args.connection.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose(), rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Landscape(args) => args.execute(),
        Commands::App(args) => args.execute(),
        Commands::Info(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(rust_log.unwrap_or_default())
    }
}
