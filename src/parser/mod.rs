//! Parsing and serialization for layout files.

pub mod layout_file;

// Re-export commonly used functions
pub use layout_file::{
    parse_layout_file, read_layout_file, save_layout_file, LayoutFile, LayoutFormat,
};
