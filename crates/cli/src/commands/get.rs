//! Print the value(s) of one directive.

use std::path::Path;

use anyhow::Result;
use apptainer_config::{get_directive, load_or_default};

use crate::args::OutputFormat;

pub fn run(path: &Path, directive: &str, output: OutputFormat) -> Result<()> {
    let conf = load_or_default(path)?.config;
    let values = get_directive(&conf, directive)?;

    match output {
        OutputFormat::Text => {
            for value in &values {
                println!("{value}");
            }
        }
        OutputFormat::Json => super::print_json(&values)?,
    }

    Ok(())
}
