//! CLI command handlers for NkoBoard.
//!
//! Headless, scriptable access to the keyboard: inspecting and validating
//! layouts, typing key sequences without a terminal UI, and editing the
//! configuration.

pub mod common;
pub mod config;
pub mod layout;
pub mod type_keys;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use type_keys::{Transcript, TypeArgs};
pub use validate::ValidateArgs;
