//! Command dispatch logic.
//!
//! Responsibilities:
//! - Resolve the configuration file location once for every command.
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant.
//! - `--config-path` beats `APPTAINER_CONF`, which beats the built-in default.

use anyhow::Result;
use apptainer_config::config_path;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::edit::{EditAction, EditOptions};
use crate::commands::generate::GenerateOptions;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let path = config_path(cli.config_path.as_deref());
    tracing::debug!(path = %path.display(), "Resolved configuration path");

    match cli.command {
        Commands::Generate {
            defaults,
            build,
            expand_path,
            output_file,
        } => {
            let options = GenerateOptions {
                defaults,
                build,
                expand_path,
            };
            commands::generate::run(&path, options, cli.output, output_file.as_deref())?;
        }
        Commands::Check { strict } => {
            commands::check::run(&path, strict, cli.output)?;
        }
        Commands::Get { directive } => {
            commands::get::run(&path, &directive, cli.output)?;
        }
        Commands::Set {
            directive,
            value,
            dry_run,
            force,
        } => {
            let action = EditAction::Set { directive, value };
            let options = EditOptions { dry_run, force };
            commands::edit::run(&path, action, options, cli.output)?;
        }
        Commands::Unset {
            directive,
            value,
            dry_run,
            force,
        } => {
            let action = EditAction::Unset { directive, value };
            let options = EditOptions { dry_run, force };
            commands::edit::run(&path, action, options, cli.output)?;
        }
        Commands::Reset {
            directive,
            dry_run,
            force,
        } => {
            let action = EditAction::Reset { directive };
            let options = EditOptions { dry_run, force };
            commands::edit::run(&path, action, options, cli.output)?;
        }
        Commands::List => {
            commands::list::run(cli.output)?;
        }
    }

    Ok(())
}
