//! List every known directive.

use anyhow::Result;
use apptainer_config::{CATALOG, Emission, ListStyle, OptionSpec};
use serde::Serialize;

use crate::args::OutputFormat;

#[derive(Serialize)]
struct DirectiveInfo {
    directive: &'static str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_style: Option<&'static str>,
    default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    accepted: Option<&'static [&'static str]>,
    always_emitted: bool,
}

impl From<&OptionSpec> for DirectiveInfo {
    fn from(spec: &OptionSpec) -> Self {
        Self {
            directive: spec.directive,
            kind: spec.kind.name(),
            list_style: spec.list_style().map(|style| match style {
                ListStyle::Repeated => "repeated",
                ListStyle::Joined => "joined",
            }),
            default: spec.default.to_text(),
            accepted: spec.accepted(),
            always_emitted: spec.emission == Emission::Always,
        }
    }
}

pub fn run(output: OutputFormat) -> Result<()> {
    let infos: Vec<DirectiveInfo> = CATALOG.iter().map(DirectiveInfo::from).collect();

    match output {
        OutputFormat::Text => {
            println!("{:<28} {:<8} {}", "Directive", "Kind", "Default");
            println!("{}", "-".repeat(75));
            for info in &infos {
                let default = info.default.as_deref().unwrap_or("-");
                match info.accepted {
                    Some(accepted) => println!(
                        "{:<28} {:<8} {} {{{}}}",
                        info.directive,
                        info.kind,
                        default,
                        accepted.join(", ")
                    ),
                    None => println!("{:<28} {:<8} {}", info.directive, info.kind, default),
                }
            }
        }
        OutputFormat::Json => super::print_json(&infos)?,
    }

    Ok(())
}
