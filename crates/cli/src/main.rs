//! apptainer-conf - Command-line interface for apptainer.conf.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Install the logging subscriber (stderr, filtered by `RUST_LOG`).
//! - Run the selected command and translate failures into exit codes.
//!
//! Does NOT handle:
//! - The configuration format or option catalog (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.
//! - Every error is printed once, with its full cause chain.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
