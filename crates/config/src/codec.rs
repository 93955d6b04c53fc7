//! Canonical text codec for `apptainer.conf`.
//!
//! Responsibilities:
//! - Render a configuration value into the canonical commented file.
//! - Parse an administrator-edited file back into a configuration value.
//! - Provide the per-kind value decoders shared with the editing API.
//!
//! Does NOT handle:
//! - Reading or writing files (see `persistence`).
//! - Option metadata (see `schema`); both directions walk `schema::CATALOG`.
//!
//! Invariants:
//! - Rendering is deterministic: identical values produce identical bytes.
//! - Parsing is fail-fast: the first format or validation error aborts it.
//! - Unknown directives are warnings, never errors.
//! - Directives absent from the text keep their catalog default.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    BOOL_VALUES, COMMENT_PREFIX, DIRECTIVE_SEPARATOR, JOINED_LIST_SEPARATOR, NO, YES,
};
use crate::error::{Accepted, ParseError, UnknownDirective};
use crate::schema::{CATALOG, Emission, ListStyle, OptionSpec, lookup};
use crate::template;
use crate::types::{ApptainerConf, FieldView, Slot};

/// Result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Every option resolved from the text or its catalog default.
    pub config: ApptainerConf,
    /// Directives that were skipped because the catalog does not know them.
    pub warnings: Vec<UnknownDirective>,
}

// =============================================================================
// Rendering
// =============================================================================

/// Render `conf` as the canonical configuration file.
pub fn render(conf: &ApptainerConf) -> String {
    let mut out = String::from(template::PREAMBLE);
    for spec in CATALOG {
        out.push_str(spec.doc);
        render_option(&mut out, spec, conf);
    }
    out
}

fn render_option(out: &mut String, spec: &OptionSpec, conf: &ApptainerConf) {
    match spec.view(conf) {
        FieldView::Bool(value) => push_line(out, spec.directive, if value { YES } else { NO }),
        FieldView::Uint(value) => push_line(out, spec.directive, &value.to_string()),
        FieldView::Choice(token) => push_line(out, spec.directive, token),
        FieldView::Text(value) => {
            if !value.is_empty() || spec.emission == Emission::Always {
                push_line(out, spec.directive, value);
            }
        }
        FieldView::List(items) => {
            let items = items.iter().map(String::as_str).filter(|item| !item.is_empty());
            match spec.list_style() {
                Some(ListStyle::Joined) => {
                    let joined = items.collect::<Vec<_>>().join(JOINED_LIST_SEPARATOR);
                    if !joined.is_empty() {
                        push_line(out, spec.directive, &joined);
                    }
                }
                _ => items.for_each(|item| push_line(out, spec.directive, item)),
            }
        }
    }
}

fn push_line(out: &mut String, directive: &str, value: &str) {
    out.push_str(directive);
    out.push(' ');
    out.push(DIRECTIVE_SEPARATOR);
    out.push(' ');
    out.push_str(value);
    out.push('\n');
}

impl fmt::Display for ApptainerConf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse configuration text.
///
/// # Errors
///
/// Returns [`ParseError::Format`] for a line that is not `key = value`,
/// [`ParseError::DuplicateDirective`] for a repeated single-line list, and
/// [`ParseError::Validation`] for a value outside its directive's type or set.
pub fn parse(text: &str) -> Result<Parsed, ParseError> {
    let mut config = ApptainerConf::default();
    let mut warnings = Vec::new();
    let mut occurrences: HashMap<&'static str, usize> = HashMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let (key, value) = match trimmed.split_once(DIRECTIVE_SEPARATOR) {
            Some((key, value)) if !key.trim().is_empty() => (key.trim(), value.trim()),
            _ => {
                return Err(ParseError::Format {
                    line,
                    content: raw.to_string(),
                });
            }
        };

        let Some(spec) = lookup(key) else {
            tracing::warn!(line, directive = key, "Ignoring unknown directive");
            warnings.push(UnknownDirective {
                line,
                directive: key.to_string(),
            });
            continue;
        };

        let seen = occurrences.entry(spec.directive).or_insert(0);
        *seen += 1;
        let first = *seen == 1;

        match spec.list_style() {
            Some(ListStyle::Joined) if !first => {
                return Err(ParseError::DuplicateDirective {
                    line,
                    directive: spec.directive.to_string(),
                    content: raw.to_string(),
                });
            }
            None if !first => {
                tracing::warn!(
                    line,
                    directive = spec.directive,
                    "Directive given more than once; last value wins"
                );
            }
            _ => {}
        }

        store(spec, &mut config, value, first).map_err(|accepted| ParseError::Validation {
            line,
            directive: spec.directive.to_string(),
            value: value.to_string(),
            accepted,
        })?;
    }

    tracing::debug!(
        unknown_directives = warnings.len(),
        "Parsed configuration text"
    );
    Ok(Parsed { config, warnings })
}

/// Store one parsed `value` into the option described by `spec`.
///
/// `first` marks the first occurrence of the directive in the text: a
/// repeated-line list drops its catalog default there and appends afterwards.
fn store(
    spec: &OptionSpec,
    conf: &mut ApptainerConf,
    value: &str,
    first: bool,
) -> Result<(), Accepted> {
    match spec.slot(conf) {
        Slot::Bool(slot) => *slot = decode_bool(value)?,
        Slot::Uint(slot) => *slot = decode_uint(value)?,
        Slot::Choice(slot) => slot
            .assign(value)
            .map_err(|e| Accepted::OneOf(e.accepted))?,
        Slot::Text(slot) => *slot = value.to_string(),
        Slot::List(slot) => match spec.list_style() {
            Some(ListStyle::Joined) => *slot = split_joined(value),
            _ => {
                if first {
                    slot.clear();
                }
                if !value.is_empty() {
                    slot.push(value.to_string());
                }
            }
        },
    }
    Ok(())
}

impl FromStr for ApptainerConf {
    type Err = ParseError;

    /// Parse configuration text, dropping the (already logged) warnings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|parsed| parsed.config)
    }
}

// =============================================================================
// Value Decoders
// =============================================================================

/// Decode a `yes`/`no` token.
pub(crate) fn decode_bool(value: &str) -> Result<bool, Accepted> {
    match value {
        YES => Ok(true),
        NO => Ok(false),
        _ => Err(Accepted::OneOf(BOOL_VALUES)),
    }
}

/// Decode a non-negative decimal integer.
pub(crate) fn decode_uint(value: &str) -> Result<u64, Accepted> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Accepted::UnsignedInteger);
    }
    value.parse().map_err(|_| Accepted::UnsignedInteger)
}

/// Split a joined-line list value into its trimmed, non-empty elements.
pub(crate) fn split_joined(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
