use std::{io, process::ExitCode};

use clap::Parser;
use cua::cli::{Arguments, ExitStatus};

/// Environment variable that overrides the log filter (EnvFilter syntax).
const LOG_ENV: &str = "CUA_LOG";

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match cua::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("error")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
