//! Reading and writing layout files.
//!
//! A layout file holds the physical key grid (as key code names) and the two
//! glyph layers. TOML is the default format; files ending in `.json` are read
//! and written as JSON.
//!
//! ```toml
//! name = "Tiny"
//! keys = [["KeyA", "Backspace"], ["ShiftLeft", "Space"]]
//!
//! [primary]
//! name = "Letters"
//! rows = [["ߊ", "Backspace"], ["Shift", "Space"]]
//!
//! [alternate]
//! name = "Marks"
//! rows = [["߮", "Backspace"], ["Shift", "Space"]]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Layer, LayerId, LayoutError, LayoutErrorKind, LayoutTable, PhysicalKey};

/// On-disk form of a [`LayoutTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFile {
    /// Layout name
    pub name: String,
    /// Physical key rows, as key code names
    pub keys: Vec<Vec<String>>,
    /// Primary layer
    pub primary: Layer,
    /// Alternate layer
    pub alternate: Layer,
}

/// Serialization format of a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl LayoutFormat {
    /// Picks the format from a file extension (`.json` is JSON, anything else TOML).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl LayoutFile {
    /// Converts the file into a validated table.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] for unknown key names or any shape problem
    /// [`LayoutTable::new`] rejects.
    pub fn into_table(self) -> Result<LayoutTable, LayoutError> {
        let mut keys = Vec::with_capacity(self.keys.len());
        for (row, names) in self.keys.iter().enumerate() {
            let mut parsed = Vec::with_capacity(names.len());
            for (col, name) in names.iter().enumerate() {
                let key = name.parse::<PhysicalKey>().map_err(|err| {
                    LayoutError::new(LayoutErrorKind::UnknownKeyName, err.to_string())
                        .with_position(row, col)
                })?;
                parsed.push(key);
            }
            keys.push(parsed);
        }

        LayoutTable::new(self.name, keys, self.primary, self.alternate)
    }

    /// Builds the file form of an existing table.
    #[must_use]
    pub fn from_table(table: &LayoutTable) -> Self {
        Self {
            name: table.name().to_string(),
            keys: table
                .rows()
                .iter()
                .map(|row| row.iter().map(|key| key.code().to_string()).collect())
                .collect(),
            primary: table.layer(LayerId::Primary).clone(),
            alternate: table.layer(LayerId::Alternate).clone(),
        }
    }

    /// Parses file content in the given format.
    pub fn parse(content: &str, format: LayoutFormat) -> Result<Self> {
        match format {
            LayoutFormat::Toml => toml::from_str(content).context("Invalid TOML layout"),
            LayoutFormat::Json => serde_json::from_str(content).context("Invalid JSON layout"),
        }
    }

    /// Renders the file in the given format.
    pub fn render(&self, format: LayoutFormat) -> Result<String> {
        match format {
            LayoutFormat::Toml => {
                toml::to_string_pretty(self).context("Failed to serialize layout to TOML")
            }
            LayoutFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize layout to JSON")
            }
        }
    }
}

/// Reads a layout file without validating its shape.
pub fn read_layout_file(path: &Path) -> Result<LayoutFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    LayoutFile::parse(&content, LayoutFormat::from_path(path))
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Reads and validates a layout file.
pub fn parse_layout_file(path: &Path) -> Result<LayoutTable> {
    let file = read_layout_file(path)?;
    let table = file
        .into_table()
        .with_context(|| format!("Invalid layout in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        name = table.name(),
        keys = table.key_count(),
        "loaded layout file"
    );
    Ok(table)
}

/// Writes a table to disk, format chosen by extension.
///
/// Uses temp file + rename so a failed write never leaves a partial file.
pub fn save_layout_file(table: &LayoutTable, path: &Path) -> Result<()> {
    let content = LayoutFile::from_table(table).render(LayoutFormat::from_path(path))?;
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp layout file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp layout file to: {}", path.display()))?;

    Ok(())
}
