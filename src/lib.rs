//! NkoBoard library
//!
//! An on-screen N'Ko keyboard: a validated [`models::LayoutTable`] of glyph
//! layers, the [`controller::InputController`] state machine that turns key
//! activations into text, and the terminal and command-line hosts around it.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod logging;
pub mod models;
pub mod parser;
pub mod services;
pub mod shortcuts;
pub mod tui;
