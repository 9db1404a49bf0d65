//! Validation command for layout files.

use crate::cli::common::{CliError, CliResult};
use crate::models::{LayoutError, LayoutTable};
use crate::parser::read_layout_file;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check a layout file for shape errors
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to layout file (TOML, or JSON by extension)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for `validate --json`.
#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<LayoutSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationIssue>,
}

#[derive(Debug, Serialize)]
struct LayoutSummary {
    name: String,
    rows: usize,
    keys: usize,
}

#[derive(Debug, Serialize)]
struct ValidationIssue {
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    col: Option<usize>,
    message: String,
}

impl From<&LayoutError> for ValidationIssue {
    fn from(error: &LayoutError) -> Self {
        Self {
            kind: format!("{:?}", error.kind),
            layer: error.layer.map(|layer| layer.to_string()),
            row: error.row,
            col: error.col,
            message: error.message.clone(),
        }
    }
}

impl From<&LayoutTable> for LayoutSummary {
    fn from(table: &LayoutTable) -> Self {
        Self {
            name: table.name().to_string(),
            rows: table.rows().len(),
            keys: table.key_count(),
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        // Syntax errors are reported as-is; only shape errors get structure
        let file = read_layout_file(&self.file)
            .map_err(|e| CliError::from_load(&e, format!("Failed to load layout: {e:#}")))?;

        let response = match file.into_table() {
            Ok(table) => ValidationResponse {
                valid: true,
                summary: Some(LayoutSummary::from(&table)),
                error: None,
            },
            Err(error) => {
                tracing::debug!(%error, path = %self.file.display(), "layout rejected");
                ValidationResponse {
                    valid: false,
                    summary: None,
                    error: Some(ValidationIssue::from(&error)),
                }
            }
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if let Some(summary) = &response.summary {
            println!("✓ Validation passed");
            println!("  Name: {}", summary.name);
            println!("  Rows: {}", summary.rows);
            println!("  Keys: {}", summary.keys);
        } else if let Some(issue) = &response.error {
            println!("✗ Validation failed");
            let location = match (&issue.layer, issue.row, issue.col) {
                (Some(layer), Some(row), Some(col)) => format!("[{layer} ({row}, {col})] "),
                (Some(layer), Some(row), None) => format!("[{layer} row {row}] "),
                (Some(layer), None, _) => format!("[{layer}] "),
                (None, Some(row), Some(col)) => format!("[({row}, {col})] "),
                _ => String::new(),
            };
            println!("  ✗ {location}{}", issue.message);
        }

        if response.valid {
            Ok(())
        } else {
            Err(CliError::validation("Validation failed"))
        }
    }
}
