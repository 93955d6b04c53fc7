//! Validate the configuration file.

use std::path::Path;

use anyhow::Result;
use apptainer_config::load_file;
use serde::Serialize;

use crate::args::OutputFormat;
use crate::error::CliError;

pub fn run(path: &Path, strict: bool, output: OutputFormat) -> Result<()> {
    let parsed = load_file(path)?;

    match output {
        OutputFormat::Text => {
            for warning in &parsed.warnings {
                println!("warning: {warning}");
            }
            println!(
                "{}: OK ({} warning(s))",
                path.display(),
                parsed.warnings.len()
            );
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Report<'a> {
                path: String,
                valid: bool,
                warnings: &'a [apptainer_config::UnknownDirective],
            }

            super::print_json(&Report {
                path: path.display().to_string(),
                valid: !strict || parsed.warnings.is_empty(),
                warnings: &parsed.warnings,
            })?;
        }
    }

    if strict && !parsed.warnings.is_empty() {
        return Err(CliError::UnknownDirectives {
            path: path.display().to_string(),
            count: parsed.warnings.len(),
        }
        .into());
    }

    Ok(())
}
