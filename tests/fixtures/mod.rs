//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use nkoboard::controller::KeyboardHost;
use nkoboard::models::{Layer, LayoutTable, PhysicalKey};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Small valid layout in TOML form: two rows, one blank alternate key.
pub const TINY_LAYOUT_TOML: &str = r#"
name = "Tiny"
keys = [["KeyA", "KeyB", "Backspace"], ["ShiftLeft", "Space", "Enter"]]

[primary]
name = "Letters"
rows = [["a", "b", "Backspace"], ["Shift", "Space", "Enter"]]

[alternate]
name = "Capitals"
rows = [["A", "", "Backspace"], ["Shift", "Space", "Enter"]]
"#;

/// Layout whose alternate layer is one column short on row 1.
pub const SHORT_ROW_LAYOUT_TOML: &str = r#"
name = "Broken"
keys = [["KeyA", "KeyB"], ["ShiftLeft", "Space"]]

[primary]
name = "P"
rows = [["a", "b"], ["Shift", "Space"]]

[alternate]
name = "A"
rows = [["A", "B"], ["Shift"]]
"#;

/// Layout naming a key that does not exist.
pub const UNKNOWN_KEY_LAYOUT_TOML: &str = r#"
name = "Typo"
keys = [["KeyA", "KeyNope"]]

[primary]
name = "P"
rows = [["a", "b"]]

[alternate]
name = "A"
rows = [["A", "B"]]
"#;

/// Builds the tiny layout directly.
pub fn tiny_table() -> LayoutTable {
    LayoutTable::new(
        "Tiny",
        vec![
            vec![PhysicalKey::KeyA, PhysicalKey::KeyB, PhysicalKey::Backspace],
            vec![PhysicalKey::ShiftLeft, PhysicalKey::Space, PhysicalKey::Enter],
        ],
        Layer::new(
            "Letters",
            &[&["a", "b", "Backspace"], &["Shift", "Space", "Enter"]],
        ),
        Layer::new(
            "Capitals",
            &[&["A", "", "Backspace"], &["Shift", "Space", "Enter"]],
        ),
    )
    .expect("tiny layout should be valid")
}

/// Writes `content` to `name` inside a fresh temp dir.
pub fn write_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (path, temp_dir)
}

/// Path to the nkoboard binary
pub fn nkoboard_bin() -> &'static str {
    env!("CARGO_BIN_EXE_nkoboard")
}

/// Creates a Command whose config directory is isolated in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(nkoboard_bin());
    cmd.env("NKOBOARD_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Host recording every push from the controller.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Current label per key
    pub labels: HashMap<PhysicalKey, String>,
    /// Number of label pushes
    pub label_pushes: usize,
    /// Every display text pushed, in order
    pub texts: Vec<String>,
    /// Number of focus requests
    pub focus_requests: usize,
}

impl RecordingHost {
    /// Last text pushed to the display.
    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }

    /// Current label of a key.
    pub fn label(&self, key: PhysicalKey) -> &str {
        self.labels.get(&key).map_or("", String::as_str)
    }
}

impl KeyboardHost for RecordingHost {
    fn set_key_label(&mut self, key: PhysicalKey, label: &str) {
        self.labels.insert(key, label.to_string());
        self.label_pushes += 1;
    }

    fn set_display_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn focus_display(&mut self) {
        self.focus_requests += 1;
    }
}
