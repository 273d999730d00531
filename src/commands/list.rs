use bbm_keys::config::{EnvLookup, Resolution, Resolver, Setting};
use bbm_keys::styling::println;
use color_print::cformat;
use serde::Serialize;

use crate::cli::OutputFormat;

/// One `list` row. Carries provenance only, never the value.
#[derive(Debug, Serialize)]
struct ListEntry {
    setting: Setting,
    /// Winning variable, absent when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    variable: Option<String>,
    alias: bool,
    candidates: Vec<String>,
}

fn list_entries<E: EnvLookup>(resolver: &Resolver<E>) -> Vec<ListEntry> {
    resolver
        .resolve_all()
        .into_iter()
        .map(|(setting, resolution)| ListEntry {
            setting,
            alias: resolution.is_alias(),
            variable: match resolution {
                Resolution::Environment { variable, .. } => Some(variable),
                _ => None,
            },
            candidates: resolver
                .candidates(setting)
                .into_iter()
                .map(String::from)
                .collect(),
        })
        .collect()
}

fn render_text(entries: &[ListEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.setting.name().len())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|entry| {
            let name = format!("{:<width$}", entry.setting.name());
            match (&entry.variable, entry.alias) {
                (Some(variable), false) => cformat!("<bold>{name}</>  {variable}"),
                (Some(variable), true) => {
                    cformat!("<bold>{name}</>  {variable} <dim>(alias)</>")
                }
                (None, _) => cformat!("<bold>{name}</>  <bright-black>unset</>"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn handle_list<E: EnvLookup>(
    resolver: &Resolver<E>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let entries = list_entries(resolver);
    match format {
        OutputFormat::Text => println!("{}", render_text(&entries)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}
