//! Glyph layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the two glyph layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerId {
    /// Primary script layer (active at startup)
    #[default]
    Primary,
    /// Alternate symbol/punctuation layer
    Alternate,
}

impl LayerId {
    /// Both layers in table order.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Alternate];

    /// Returns the other layer.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Primary => Self::Alternate,
            Self::Alternate => Self::Primary,
        }
    }

    /// Index of this layer in [`LayerId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Alternate => 1,
        }
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Alternate => write!(f, "alternate"),
        }
    }
}

impl std::str::FromStr for LayerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" | "base" => Ok(Self::Primary),
            "alternate" | "alt" | "shift" => Ok(Self::Alternate),
            other => Err(format!(
                "unknown layer '{other}' (expected 'primary' or 'alternate')"
            )),
        }
    }
}

/// One complete glyph assignment, row by row.
///
/// Rows line up 1:1 with the physical key rows of the owning
/// [`LayoutTable`](super::LayoutTable). An empty string is a blank key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    /// Human-readable name (e.g. "N'Ko", "Symbols")
    pub name: String,
    /// Glyph rows
    pub rows: Vec<Vec<String>>,
}

impl Layer {
    /// Creates a layer from rows of string slices.
    pub fn new(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        Self {
            name: name.into(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| (*s).to_string()).collect())
                .collect(),
        }
    }

    /// Returns the glyph at a row/column, if that cell exists.
    #[must_use]
    pub fn glyph(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
