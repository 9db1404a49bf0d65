//! Immutable key-to-glyph table.
//!
//! A [`LayoutTable`] pairs the physical key grid with one glyph grid per
//! layer. All shape checks happen in [`LayoutTable::new`]; once built the
//! table is never mutated and every lookup for an in-grid position succeeds.

use std::collections::HashMap;
use std::fmt;

use super::layer::{Layer, LayerId};
use super::physical_key::{ControlAction, KeyRole, PhysicalKey, Position};

/// Kinds of layout configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutErrorKind {
    /// The physical grid has no rows
    EmptyLayout,
    /// A physical row has no keys
    EmptyRow,
    /// A layer's row count differs from the physical grid
    RowCountMismatch,
    /// A layer row's column count differs from the physical row
    ColumnCountMismatch,
    /// The same physical key appears twice in the grid
    DuplicateKey,
    /// A control or inert key shows different labels on different layers
    ControlLabelMismatch,
    /// A key code name in a layout file is not recognized
    UnknownKeyName,
}

impl fmt::Display for LayoutErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "Empty Layout"),
            Self::EmptyRow => write!(f, "Empty Row"),
            Self::RowCountMismatch => write!(f, "Row Count Mismatch"),
            Self::ColumnCountMismatch => write!(f, "Column Count Mismatch"),
            Self::DuplicateKey => write!(f, "Duplicate Key"),
            Self::ControlLabelMismatch => write!(f, "Control Label Mismatch"),
            Self::UnknownKeyName => write!(f, "Unknown Key Name"),
        }
    }
}

/// Fatal configuration error raised while building a [`LayoutTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutError {
    /// Kind of error
    pub kind: LayoutErrorKind,
    /// Layer the error was found on, if any
    pub layer: Option<LayerId>,
    /// Row context
    pub row: Option<usize>,
    /// Column context
    pub col: Option<usize>,
    /// Human-readable message
    pub message: String,
}

impl LayoutError {
    /// Creates a new layout error.
    pub fn new(kind: LayoutErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            layer: None,
            row: None,
            col: None,
            message: message.into(),
        }
    }

    /// Sets the layer context.
    #[must_use]
    pub const fn with_layer(mut self, layer: LayerId) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Sets the row context.
    #[must_use]
    pub const fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Sets the row and column context.
    #[must_use]
    pub const fn with_position(mut self, row: usize, col: usize) -> Self {
        self.row = Some(row);
        self.col = Some(col);
        self
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(layer) = self.layer {
            write!(f, "[{layer} layer")?;
            match (self.row, self.col) {
                (Some(row), Some(col)) => write!(f, " ({row}, {col})] ")?,
                (Some(row), None) => write!(f, " row {row}] ")?,
                _ => write!(f, "] ")?,
            }
        } else if let (Some(row), Some(col)) = (self.row, self.col) {
            write!(f, "[({row}, {col})] ")?;
        }
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for LayoutError {}

/// Immutable layout: physical key grid plus aligned glyph layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    name: String,
    keys: Vec<Vec<PhysicalKey>>,
    layers: [Layer; 2],
    positions: HashMap<PhysicalKey, Position>,
}

impl LayoutTable {
    /// Builds and validates a layout table.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the grid or one of its rows is empty, a
    /// key repeats, any layer's rows or columns do not line up with the
    /// physical grid, or a non-glyph key carries different labels on the two
    /// layers.
    pub fn new(
        name: impl Into<String>,
        keys: Vec<Vec<PhysicalKey>>,
        primary: Layer,
        alternate: Layer,
    ) -> Result<Self, LayoutError> {
        if keys.iter().all(Vec::is_empty) {
            return Err(LayoutError::new(
                LayoutErrorKind::EmptyLayout,
                "layout has no physical keys",
            ));
        }

        // Every row holds at least one distinct key, so positions fit in u8
        if let Some(row) = keys.iter().position(Vec::is_empty) {
            return Err(
                LayoutError::new(LayoutErrorKind::EmptyRow, "physical row has no keys")
                    .with_row(row),
            );
        }

        let mut positions = HashMap::new();
        for (row, keys_in_row) in keys.iter().enumerate() {
            for (col, key) in keys_in_row.iter().enumerate() {
                let position = Position::new(row as u8, col as u8);
                if let Some(first) = positions.insert(*key, position) {
                    return Err(LayoutError::new(
                        LayoutErrorKind::DuplicateKey,
                        format!("{key} already appears at {first}"),
                    )
                    .with_position(row, col));
                }
            }
        }

        let layers = [primary, alternate];
        for (id, layer) in LayerId::ALL.iter().zip(&layers) {
            Self::check_alignment(&keys, *id, layer)?;
        }
        Self::check_control_labels(&keys, &layers)?;

        Ok(Self {
            name: name.into(),
            keys,
            layers,
            positions,
        })
    }

    fn check_alignment(
        keys: &[Vec<PhysicalKey>],
        id: LayerId,
        layer: &Layer,
    ) -> Result<(), LayoutError> {
        if layer.rows.len() != keys.len() {
            return Err(LayoutError::new(
                LayoutErrorKind::RowCountMismatch,
                format!(
                    "layer '{}' has {} rows, physical layout has {}",
                    layer.name,
                    layer.rows.len(),
                    keys.len()
                ),
            )
            .with_layer(id));
        }

        for (row, (glyphs, physical)) in layer.rows.iter().zip(keys).enumerate() {
            if glyphs.len() != physical.len() {
                return Err(LayoutError::new(
                    LayoutErrorKind::ColumnCountMismatch,
                    format!(
                        "layer '{}' has {} keys, physical row has {}",
                        layer.name,
                        glyphs.len(),
                        physical.len()
                    ),
                )
                .with_layer(id)
                .with_row(row));
            }
        }

        Ok(())
    }

    fn check_control_labels(
        keys: &[Vec<PhysicalKey>],
        layers: &[Layer; 2],
    ) -> Result<(), LayoutError> {
        let [primary, alternate] = layers;
        for (row, keys_in_row) in keys.iter().enumerate() {
            for (col, key) in keys_in_row.iter().enumerate() {
                if key.is_glyph_key() {
                    continue;
                }
                let a = &primary.rows[row][col];
                let b = &alternate.rows[row][col];
                if a != b {
                    return Err(LayoutError::new(
                        LayoutErrorKind::ControlLabelMismatch,
                        format!("{key} is labelled '{a}' on one layer and '{b}' on the other"),
                    )
                    .with_layer(LayerId::Alternate)
                    .with_position(row, col));
                }
            }
        }
        Ok(())
    }

    /// Layout name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical key rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<PhysicalKey>] {
        &self.keys
    }

    /// Returns a layer by id.
    #[must_use]
    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.index()]
    }

    /// Returns the glyph at a position in a layer.
    ///
    /// `Some("")` means a blank key; `None` only for positions outside the
    /// grid.
    #[must_use]
    pub fn glyph_at(&self, layer: LayerId, row: usize, col: usize) -> Option<&str> {
        self.layer(layer).glyph(row, col)
    }

    /// Returns the physical key at a position.
    #[must_use]
    pub fn key_at(&self, row: usize, col: usize) -> Option<PhysicalKey> {
        self.keys.get(row)?.get(col).copied()
    }

    /// Returns the grid position of a physical key, if the layout has it.
    #[must_use]
    pub fn position_of(&self, key: PhysicalKey) -> Option<Position> {
        self.positions.get(&key).copied()
    }

    /// Whether the layout contains this physical key.
    #[must_use]
    pub fn contains(&self, key: PhysicalKey) -> bool {
        self.positions.contains_key(&key)
    }

    /// Whether this key triggers a control action.
    #[must_use]
    pub fn is_control_key(&self, key: PhysicalKey) -> bool {
        self.control_action_of(key).is_some()
    }

    /// Control action for this key, `None` for glyph and inert keys.
    #[must_use]
    pub fn control_action_of(&self, key: PhysicalKey) -> Option<ControlAction> {
        key.control_action()
    }

    /// Role of this key.
    #[must_use]
    pub fn role_of(&self, key: PhysicalKey) -> KeyRole {
        key.role()
    }

    /// Label a host should display for `key` while `layer` is active.
    #[must_use]
    pub fn label_for(&self, layer: LayerId, key: PhysicalKey) -> Option<&str> {
        let position = self.position_of(key)?;
        self.glyph_at(layer, position.row as usize, position.col as usize)
    }

    /// Iterates every key with its position, row by row.
    pub fn iter_keys(&self) -> impl Iterator<Item = (Position, PhysicalKey)> + '_ {
        self.keys.iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .map(move |(col, key)| (Position::new(row as u8, col as u8), *key))
        })
    }

    /// The Shift key this layout has, preferring ShiftLeft.
    #[must_use]
    pub fn shift_key(&self) -> Option<PhysicalKey> {
        [PhysicalKey::ShiftLeft, PhysicalKey::ShiftRight]
            .into_iter()
            .find(|key| self.contains(*key))
    }

    /// Total number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PhysicalKey::{Backspace, KeyA, KeyB, ShiftLeft, Space};

    fn grid() -> Vec<Vec<PhysicalKey>> {
        vec![vec![KeyA, KeyB, Backspace], vec![ShiftLeft, Space]]
    }

    fn primary() -> Layer {
        Layer::new("P", &[&["a", "b", "Backspace"], &["Shift", "Space"]])
    }

    fn alternate() -> Layer {
        Layer::new("A", &[&["!", "", "Backspace"], &["Shift", "Space"]])
    }

    #[test]
    fn test_valid_table() {
        let table = LayoutTable::new("t", grid(), primary(), alternate()).unwrap();
        assert_eq!(table.key_count(), 5);
        assert_eq!(table.glyph_at(LayerId::Primary, 0, 1), Some("b"));
        assert_eq!(table.glyph_at(LayerId::Alternate, 0, 1), Some(""));
        assert_eq!(table.position_of(Space), Some(Position::new(1, 1)));
        assert_eq!(table.key_at(1, 0), Some(ShiftLeft));
        assert!(table.is_control_key(Backspace));
        assert!(!table.is_control_key(KeyA));
        assert_eq!(table.label_for(LayerId::Alternate, KeyA), Some("!"));
        assert_eq!(table.label_for(LayerId::Alternate, PhysicalKey::KeyZ), None);
    }

    #[test]
    fn test_row_count_mismatch() {
        let short = Layer::new("A", &[&["!", "", "Backspace"]]);
        let err = LayoutTable::new("t", grid(), primary(), short).unwrap_err();
        assert_eq!(err.kind, LayoutErrorKind::RowCountMismatch);
        assert_eq!(err.layer, Some(LayerId::Alternate));
    }

    #[test]
    fn test_column_count_mismatch() {
        let narrow = Layer::new("P", &[&["a", "b", "Backspace"], &["Shift"]]);
        let err = LayoutTable::new("t", grid(), narrow, alternate()).unwrap_err();
        assert_eq!(err.kind, LayoutErrorKind::ColumnCountMismatch);
        assert_eq!(err.layer, Some(LayerId::Primary));
        assert_eq!(err.row, Some(1));
    }

    #[test]
    fn test_duplicate_key() {
        let keys = vec![vec![KeyA, KeyA, Backspace], vec![ShiftLeft, Space]];
        let err = LayoutTable::new("t", keys, primary(), alternate()).unwrap_err();
        assert_eq!(err.kind, LayoutErrorKind::DuplicateKey);
        assert_eq!((err.row, err.col), (Some(0), Some(1)));
    }

    #[test]
    fn test_control_label_mismatch() {
        let alt = Layer::new("A", &[&["!", "", "Back"], &["Shift", "Space"]]);
        let err = LayoutTable::new("t", grid(), primary(), alt).unwrap_err();
        assert_eq!(err.kind, LayoutErrorKind::ControlLabelMismatch);
    }

    #[test]
    fn test_empty_layout() {
        let err = LayoutTable::new("t", vec![], Layer::new("P", &[]), Layer::new("A", &[]))
            .unwrap_err();
        assert_eq!(err.kind, LayoutErrorKind::EmptyLayout);
    }

    #[test]
    fn test_empty_row_is_rejected() {
        // Rows past 255 would alias earlier positions if empty rows were allowed
        let mut keys = vec![vec![KeyA]];
        keys.extend(std::iter::repeat_with(Vec::new).take(255));
        keys.push(vec![KeyB]);
        let mut rows: Vec<&[&str]> = vec![&["a"]];
        rows.extend(std::iter::repeat(&[][..]).take(255));
        rows.push(&["b"]);

        let err = LayoutTable::new("t", keys, Layer::new("P", &rows), Layer::new("A", &rows))
            .unwrap_err();
        assert_eq!(err.kind, LayoutErrorKind::EmptyRow);
        assert_eq!(err.row, Some(1));
    }

    #[test]
    fn test_shift_key_follows_the_grid() {
        let table = LayoutTable::new("t", grid(), primary(), alternate()).unwrap();
        assert_eq!(table.shift_key(), Some(ShiftLeft));

        let keys = vec![vec![KeyA, KeyB, Backspace], vec![PhysicalKey::ShiftRight, Space]];
        let table = LayoutTable::new("t", keys, primary(), alternate()).unwrap();
        assert_eq!(table.shift_key(), Some(PhysicalKey::ShiftRight));

        let keys = vec![vec![KeyA, KeyB, Backspace], vec![PhysicalKey::Tab, Space]];
        let no_shift = Layer::new("P", &[&["a", "b", "Backspace"], &["Tab", "Space"]]);
        let table = LayoutTable::new("t", keys, no_shift.clone(), no_shift).unwrap();
        assert_eq!(table.shift_key(), None);
    }

    #[test]
    fn test_error_display() {
        let err = LayoutError::new(LayoutErrorKind::ColumnCountMismatch, "too short")
            .with_layer(LayerId::Primary)
            .with_row(3);
        assert_eq!(
            err.to_string(),
            "[primary layer row 3] Column Count Mismatch: too short"
        );
    }
}
