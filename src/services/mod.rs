//! Service layer for business logic.
//!
//! This module contains services that coordinate between configuration,
//! layout files and the built-in layout.

pub mod layouts;

// Re-export commonly used types and functions
pub use layouts::{LayoutService, LayoutSource};
