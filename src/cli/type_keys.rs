//! Headless typing command.
//!
//! Feeds key code names to a controller without a terminal UI and prints
//! the resulting text. Useful for scripting and for checking a custom layout.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::controller::{InputController, KeyMessage, KeyboardHost};
use crate::models::{LayerId, PhysicalKey};
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Type a sequence of physical keys and print the resulting text
#[derive(Debug, Clone, Args)]
pub struct TypeArgs {
    /// Key code names in order (e.g. KeyA Space ShiftLeft KeyS)
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Layout file to type with instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    pub layout: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Host that keeps the last display text and counts label pushes.
#[derive(Debug, Default)]
pub struct Transcript {
    /// Last text pushed to the display
    pub text: String,
    /// Number of individual key label updates
    pub label_updates: usize,
}

impl KeyboardHost for Transcript {
    fn set_key_label(&mut self, _key: PhysicalKey, _label: &str) {
        self.label_updates += 1;
    }

    fn set_display_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn focus_display(&mut self) {}
}

#[derive(Debug, Serialize)]
struct TypeOutput<'a> {
    text: &'a str,
    chars: usize,
    layer: LayerId,
}

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self) -> CliResult<()> {
        let keys = self
            .keys
            .iter()
            .map(|name| name.parse::<PhysicalKey>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let table = LayoutService::resolve(self.layout.as_deref(), &config)
            .map_err(|e| CliError::from_load(&e, format!("{e:#}")))?;

        let mut controller = InputController::new(table, Transcript::default());
        for key in keys {
            controller.handle(KeyMessage::Activated(key));
        }

        if self.json {
            let output = TypeOutput {
                text: controller.buffer(),
                chars: controller.buffer().chars().count(),
                layer: controller.active_layer(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{}", controller.host().text);
        }

        Ok(())
    }
}
