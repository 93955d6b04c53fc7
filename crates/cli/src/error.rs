//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration library errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.
//! - The first recognized error in the anyhow chain decides the code.

use apptainer_config::{ConfigFileError, EditError, ParseError};
use thiserror::Error;

/// Structured exit codes for apptainer-conf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Invalid configuration - format or validation error in the file or a value.
    ///
    /// Scripts should fix the input and not retry.
    InvalidConfig = 2,

    /// I/O error - the configuration file could not be read or written.
    IoError = 3,

    /// Unknown directive - a name absent from the option catalog.
    UnknownDirective = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures raised by the CLI itself rather than the configuration library.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{count} unknown directive(s) in {path}")]
    UnknownDirectives { path: String, count: usize },

    #[error(
        "refusing to rewrite {path}: it would drop unknown directive(s) {}; pass --force to save anyway",
        .directives.join(", ")
    )]
    WouldDropDirectives {
        path: String,
        directives: Vec<String>,
    },
}

impl From<&ConfigFileError> for ExitCode {
    fn from(err: &ConfigFileError) -> Self {
        match err {
            ConfigFileError::Read { .. } | ConfigFileError::Write { .. } => ExitCode::IoError,
            ConfigFileError::Parse { .. } => ExitCode::InvalidConfig,
        }
    }
}

impl From<&EditError> for ExitCode {
    fn from(err: &EditError) -> Self {
        match err {
            EditError::UnknownDirective(_) => ExitCode::UnknownDirective,
            EditError::Invalid { .. } | EditError::EmptyRevertsToDefault { .. } => {
                ExitCode::InvalidConfig
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no cause in the chain is recognized.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ConfigFileError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<EditError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<ParseError>().is_some() {
                return ExitCode::InvalidConfig;
            }
            if cause.downcast_ref::<CliError>().is_some() {
                return ExitCode::UnknownDirective;
            }
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return ExitCode::IoError;
            }
        }
        ExitCode::GeneralError
    }
}
