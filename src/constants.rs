//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and log file name.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "NkoBoard";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "nkoboard";

/// Prefix of the rolling log file written during interactive sessions.
pub const LOG_FILE_NAME: &str = "nkoboard.log";
