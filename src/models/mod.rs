//! Data models for physical keys, glyph layers and the layout table.
//!
//! Models are independent of the UI; the controller and every host read them
//! immutably.

pub mod layer;
pub mod layout_table;
pub mod nko;
pub mod physical_key;

// Re-export all model types
pub use layer::{Layer, LayerId};
pub use layout_table::{LayoutError, LayoutErrorKind, LayoutTable};
pub use nko::NKO_LAYOUT_NAME;
pub use physical_key::{ControlAction, KeyRole, PhysicalKey, Position, UnknownKeyName};
