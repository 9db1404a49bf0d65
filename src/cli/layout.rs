//! Layout inspection and export command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{LayerId, LayoutTable};
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print the layout grid, or export it to a file
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Layout file to show instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Only show one layer (primary or alternate)
    #[arg(long, value_name = "LAYER")]
    pub layer: Option<LayerId>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the layout to a file (.json for JSON, TOML otherwise)
    #[arg(long, value_name = "PATH", conflicts_with_all = ["json", "layer"])]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct LayoutOutput<'a> {
    name: &'a str,
    keys: usize,
    layers: Vec<LayerOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct LayerOutput<'a> {
    id: LayerId,
    name: &'a str,
    rows: Vec<Vec<KeyOutput<'a>>>,
}

#[derive(Debug, Serialize)]
struct KeyOutput<'a> {
    key: &'static str,
    label: &'a str,
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let table = LayoutService::resolve(self.layout.as_deref(), &config)
            .map_err(|e| CliError::from_load(&e, format!("{e:#}")))?;

        if let Some(path) = &self.export {
            LayoutService::save(&table, path).map_err(|e| CliError::io(format!("{e:#}")))?;
            println!("Layout '{}' written to {}", table.name(), path.display());
            return Ok(());
        }

        let layers: Vec<LayerId> = match self.layer {
            Some(layer) => vec![layer],
            None => LayerId::ALL.to_vec(),
        };

        if self.json {
            let output = LayoutOutput {
                name: table.name(),
                keys: table.key_count(),
                layers: layers
                    .iter()
                    .map(|&id| layer_output(&table, id))
                    .collect(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{} ({} keys)", table.name(), table.key_count());
            for id in layers {
                println!();
                print_layer(&table, id);
            }
        }

        Ok(())
    }
}

fn layer_output(table: &LayoutTable, id: LayerId) -> LayerOutput<'_> {
    LayerOutput {
        id,
        name: &table.layer(id).name,
        rows: table
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&key| KeyOutput {
                        key: key.code(),
                        label: table.label_for(id, key).unwrap_or_default(),
                    })
                    .collect()
            })
            .collect(),
    }
}

/// Prints one layer as rows of `Key=label` cells.
fn print_layer(table: &LayoutTable, id: LayerId) {
    println!("Layer: {id} ({})", table.layer(id).name);
    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&key| {
                let label = table.label_for(id, key).unwrap_or_default();
                format!("{}={}", key.code(), if label.is_empty() { "·" } else { label })
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
}
