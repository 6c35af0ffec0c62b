//! stringergen binary: parse flags, set up logging, run the pipeline

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use stringergen::cli::Cli;
use stringergen::extractors::GoExtractor;
use stringergen::formatter::GoFormatter;
use stringergen::Pipeline;
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Generate String method failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only generated code
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!("{}={level}", env!("CARGO_CRATE_NAME")))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config().context("Invalid command line")?;
    debug!("Run configuration: {:?}", config);

    let parser = GoExtractor::new();
    let formatter = GoFormatter::new();
    let summary = Pipeline::new(&parser, &formatter, &config)
        .run()
        .context("Pipeline aborted")?;

    debug!("Run finished: {:?}", summary);
    Ok(())
}
