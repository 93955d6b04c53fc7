//! Error types for the configuration codec and its loaders.
//!
//! Responsibilities:
//! - Define the fatal parse errors (`ParseError`) and the non-fatal warning
//!   (`UnknownDirective`) produced by the parser.
//! - Define the file-level errors (`ConfigFileError`) raised at the I/O boundary.
//! - Define the single-directive editing errors (`EditError`).
//!
//! Invariants:
//! - Every parse error carries the 1-based line number it was raised at.
//! - Validation errors always name the directive, the rejected value and
//!   what would have been accepted.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What a directive would have accepted, for validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// A member of a closed set.
    OneOf(&'static [&'static str]),
    /// A non-negative decimal integer.
    UnsignedInteger,
    /// Any text without line breaks.
    SingleLine,
    /// At least one non-blank element.
    NonEmpty,
}

impl fmt::Display for Accepted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accepted::OneOf(values) => write!(f, "{{{}}}", values.join(", ")),
            Accepted::UnsignedInteger => f.write_str("a non-negative integer"),
            Accepted::SingleLine => f.write_str("a single-line value"),
            Accepted::NonEmpty => f.write_str("a non-empty value"),
        }
    }
}

/// Fatal errors raised while parsing configuration text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-blank, non-comment line that is not `key = value`.
    #[error("line {line}: malformed directive line {content:?}, expected 'key = value'")]
    Format { line: usize, content: String },

    /// A single-line list directive appearing more than once.
    #[error("line {line}: directive '{directive}' may only appear once ({content:?})")]
    DuplicateDirective {
        line: usize,
        directive: String,
        content: String,
    },

    /// A value rejected by the directive's type or authorized set.
    #[error("line {line}: invalid value {value:?} for '{directive}', expected {accepted}")]
    Validation {
        line: usize,
        directive: String,
        value: String,
        accepted: Accepted,
    },
}

impl ParseError {
    /// Line the error was raised at.
    pub fn line(&self) -> usize {
        match self {
            ParseError::Format { line, .. }
            | ParseError::DuplicateDirective { line, .. }
            | ParseError::Validation { line, .. } => *line,
        }
    }

    /// Whether this is a grammar error rather than a value error.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            ParseError::Format { .. } | ParseError::DuplicateDirective { .. }
        )
    }
}

/// A directive name absent from the catalog. Recorded, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownDirective {
    pub line: usize,
    pub directive: String,
}

impl fmt::Display for UnknownDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: unknown directive '{}' ignored",
            self.line, self.directive
        )
    }
}

/// Errors raised while loading or saving the configuration file.
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl ConfigFileError {
    /// The parse error behind this failure, if any.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ConfigFileError::Parse { source, .. } => Some(source),
            ConfigFileError::Read { .. } | ConfigFileError::Write { .. } => None,
        }
    }
}

/// Errors raised when editing a single directive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown directive '{0}'")]
    UnknownDirective(String),

    #[error("invalid value {value:?} for '{directive}', expected {accepted}")]
    Invalid {
        directive: String,
        value: String,
        accepted: Accepted,
    },

    /// The edit would leave an option empty, which the file stores as the
    /// option's (non-empty) default.
    #[error("'{directive}' cannot be left empty, it would read back as its default {default:?}")]
    EmptyRevertsToDefault { directive: String, default: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_directive_value_and_set() {
        let err = ParseError::Validation {
            line: 12,
            directive: "mount dev".to_string(),
            value: "bogus".to_string(),
            accepted: Accepted::OneOf(&["yes", "no", "minimal"]),
        };
        assert_eq!(
            err.to_string(),
            "line 12: invalid value \"bogus\" for 'mount dev', expected {yes, no, minimal}"
        );
        assert_eq!(err.line(), 12);
        assert!(!err.is_format());
    }

    #[test]
    fn test_format_errors_report_line_and_content() {
        let err = ParseError::Format {
            line: 3,
            content: "allow setuid yes".to_string(),
        };
        assert!(err.to_string().starts_with("line 3:"));
        assert!(err.to_string().contains("allow setuid yes"));
        assert!(err.is_format());
    }

    #[test]
    fn test_empty_reverts_to_default_message() {
        let err = EditError::EmptyRevertsToDefault {
            directive: "bind path".to_string(),
            default: "/etc/localtime, /etc/hosts".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'bind path' cannot be left empty, it would read back as its default \"/etc/localtime, /etc/hosts\""
        );
    }

    #[test]
    fn test_unknown_directive_display() {
        let warning = UnknownDirective {
            line: 7,
            directive: "allow teleport".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "line 7: unknown directive 'allow teleport' ignored"
        );
    }
}
