//! Set, unset and reset single directives in the configuration file.
//!
//! The file is rewritten in canonical form, so a file holding unknown
//! directives is only saved with `--force`.

use std::path::Path;

use anyhow::{Context, Result};
use apptainer_config::{
    get_directive, load_or_default, render, reset_directive, save_file, set_directive,
    unset_directive,
};
use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::CliError;

/// How an edit is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditOptions {
    /// Print the result instead of saving it.
    pub dry_run: bool,
    /// Save even if unknown directives would be dropped.
    pub force: bool,
}

/// One edit requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Set { directive: String, value: String },
    Unset { directive: String, value: Option<String> },
    Reset { directive: String },
}

impl EditAction {
    fn directive(&self) -> &str {
        match self {
            EditAction::Set { directive, .. }
            | EditAction::Unset { directive, .. }
            | EditAction::Reset { directive } => directive,
        }
    }
}

pub fn run(
    path: &Path,
    action: EditAction,
    options: EditOptions,
    output: OutputFormat,
) -> Result<()> {
    let parsed = load_or_default(path)?;
    let mut conf = parsed.config;

    let edited = match &action {
        EditAction::Set { directive, value } => set_directive(&mut conf, directive, value),
        EditAction::Unset { directive, value } => {
            unset_directive(&mut conf, directive, value.as_deref())
        }
        EditAction::Reset { directive } => reset_directive(&mut conf, directive),
    };
    edited.with_context(|| format!("Failed to edit '{}'", action.directive()))?;

    if options.dry_run {
        match output {
            OutputFormat::Text => print!("{}", render(&conf)),
            OutputFormat::Json => super::print_json(&conf)?,
        }
        return Ok(());
    }

    if !parsed.warnings.is_empty() {
        for warning in &parsed.warnings {
            eprintln!("warning: {warning}");
        }
        if !options.force {
            return Err(CliError::WouldDropDirectives {
                path: path.display().to_string(),
                directives: parsed.warnings.into_iter().map(|w| w.directive).collect(),
            }
            .into());
        }
        tracing::warn!(
            path = %path.display(),
            dropped = parsed.warnings.len(),
            "Dropping unknown directives on rewrite"
        );
    }

    save_file(path, &conf)?;
    tracing::info!(path = %path.display(), directive = action.directive(), "Configuration updated");

    match output {
        OutputFormat::Text => {
            println!("Updated '{}' in {}", action.directive(), path.display());
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Updated<'a> {
                path: String,
                directive: &'a str,
                values: Vec<String>,
            }

            super::print_json(&Updated {
                path: path.display().to_string(),
                directive: action.directive(),
                values: get_directive(&conf, action.directive())?,
            })?;
        }
    }

    Ok(())
}
