//! Sightline CLI - Command-line interface
//!
//! This binary provides a command-line interface to the Sightline
//! library: fetch tourist places inside the current field of view, or
//! compute a one-off bearing between two points.

mod commands;
mod error;
mod sensors;

use clap::{Parser, Subcommand};

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "sightline",
    version,
    about = "Find tourist places in your field of view"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch places inside the current field of view
    Fetch(commands::fetch::FetchArgs),
    /// Compute the bearing between two points
    Bearing(commands::bearing::BearingArgs),
}

fn main() {
    sightline::telemetry::init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Fetch(args) => run_async(commands::fetch::run(args)),
        Command::Bearing(args) => commands::bearing::run(args),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

/// Runs an async command on a fresh runtime.
fn run_async<F>(future: F) -> Result<(), CliError>
where
    F: std::future::Future<Output = Result<(), CliError>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(format!("failed to create Tokio runtime: {}", e)))?;

    runtime.block_on(future)
}
