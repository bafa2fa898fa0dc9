//! Command-line interface for the manual.

use std::{env, io, process::ExitCode};

use clap::Parser;
use manual::cli::{CommandContext, args::Cli, commands};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter.
const LOG_ENV: &str = "MANUAL_LOG";

/// Installs the stderr log subscriber.
///
/// `MANUAL_LOG` takes precedence; otherwise the filter follows the `-v` count.
fn init_tracing(verbose: u8) {
    let filter = match env::var(LOG_ENV) {
        Ok(filter) => EnvFilter::new(filter),
        Err(_) => match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            _ => EnvFilter::new("debug"),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = match CommandContext::load(cli.config.as_deref()) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
