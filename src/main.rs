//! gridslice - slice images into grids and reassemble them.
//!
//! This binary parses the command line, sets up logging and reports the
//! result of a single slice or assemble command.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridslice::{
    commands::{run_assemble, run_slice, AssembleSummary, SliceSummary},
    config::{Cli, Command, OutputFormat},
    error::SliceError,
};

fn main() -> ExitCode {
    let command = Cli::parse().into_command();
    init_logging(command.verbose());

    match command {
        Command::Slice(config) => report(run_slice(&config), config.format, SliceSummary::render),
        Command::Assemble(config) => report(
            run_assemble(&config),
            config.format,
            AssembleSummary::render,
        ),
    }
}

/// Print a command summary, or log the error and fail.
fn report<T>(
    result: Result<T, SliceError>,
    format: OutputFormat,
    render: impl Fn(&T, OutputFormat) -> serde_json::Result<String>,
) -> ExitCode {
    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match render(&summary, format) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render summary: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "gridslice=debug"
    } else {
        "gridslice=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
