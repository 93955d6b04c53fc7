//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read or write the configuration file (see `apptainer_config::persistence`).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apptainer-conf")]
#[command(about = "Inspect, validate and edit apptainer.conf", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  apptainer-conf check\n  apptainer-conf generate --defaults --output-file ./apptainer.conf\n  apptainer-conf get 'bind path'\n  apptainer-conf set 'mount dev' minimal\n  apptainer-conf unset 'bind path' /etc/hosts\n  apptainer-conf --output json list\n"
)]
pub struct Cli {
    /// Path to the configuration file (overrides the default location).
    ///
    /// Can also be set via APPTAINER_CONF environment variable.
    #[arg(long, global = true, env = "APPTAINER_CONF", value_name = "FILE")]
    pub config_path: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the configuration in canonical form
    Generate {
        /// Render the built-in defaults instead of the current file
        #[arg(long)]
        defaults: bool,

        /// Drop execution-only mounts, as for an image build
        #[arg(long)]
        build: bool,

        /// Substitute the caller's PATH for `$PATH:` in `binary path`
        #[arg(long)]
        expand_path: bool,

        /// Write to FILE instead of stdout
        #[arg(long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },

    /// Validate the configuration file
    Check {
        /// Treat unknown directives as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the value(s) of a directive
    Get {
        /// Directive name, e.g. "bind path"
        directive: String,
    },

    /// Set a directive (list directives gain an element)
    Set {
        directive: String,

        value: String,

        /// Print the resulting file instead of saving it
        #[arg(long)]
        dry_run: bool,

        /// Save even though unknown directives in the file would be dropped
        #[arg(long)]
        force: bool,
    },

    /// Remove a list element, or restore the default when no value is given
    Unset {
        directive: String,

        value: Option<String>,

        /// Print the resulting file instead of saving it
        #[arg(long)]
        dry_run: bool,

        /// Save even though unknown directives in the file would be dropped
        #[arg(long)]
        force: bool,
    },

    /// Restore a directive to its built-in default
    Reset {
        directive: String,

        /// Print the resulting file instead of saving it
        #[arg(long)]
        dry_run: bool,

        /// Save even though unknown directives in the file would be dropped
        #[arg(long)]
        force: bool,
    },

    /// List every known directive with its type and default
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_unset_without_value() {
        let cli = Cli::try_parse_from(["apptainer-conf", "unset", "mount hostfs"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Unset { value: None, dry_run: false, force: false, .. }
        ));
    }

    #[test]
    fn test_parse_edit_with_force() {
        let cli =
            Cli::try_parse_from(["apptainer-conf", "set", "mount dev", "minimal", "--force"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Set { force: true, .. }));
    }

    #[test]
    fn test_output_is_global() {
        let cli = Cli::try_parse_from(["apptainer-conf", "list", "--output", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
