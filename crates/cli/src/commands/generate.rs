//! Render the configuration in canonical form.

use std::path::Path;

use anyhow::{Context, Result};
use apptainer_config::{
    ApptainerConf, Registry, load_or_default, render, save_file, write_atomic,
};

use crate::args::OutputFormat;

/// What to render and which startup adjustments to apply first.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub defaults: bool,
    pub build: bool,
    pub expand_path: bool,
}

pub fn run(
    path: &Path,
    options: GenerateOptions,
    output: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let conf = if options.defaults {
        ApptainerConf::default()
    } else {
        load_or_default(path)?.config
    };

    let mut registry = Registry::new();
    registry.set_current(conf);
    if options.expand_path {
        registry.set_binary_path(true);
    }
    let mut conf = registry
        .take()
        .context("No configuration installed after loading")?;
    if options.build {
        conf.apply_build_config();
    }

    match (output, output_file) {
        (OutputFormat::Text, Some(file)) => {
            save_file(file, &conf)?;
            println!("Configuration written to {}", file.display());
        }
        (OutputFormat::Text, None) => print!("{}", render(&conf)),
        (OutputFormat::Json, Some(file)) => {
            let json = serde_json::to_string_pretty(&conf)?;
            write_atomic(file, &(json + "\n"))?;
            println!("Configuration written to {}", file.display());
        }
        (OutputFormat::Json, None) => super::print_json(&conf)?,
    }

    Ok(())
}
