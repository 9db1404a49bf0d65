//! End-to-end tests for `nkoboard layout`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_layout_prints_builtin_grid() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["layout"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("N'Ko (60 keys)"));
    assert!(stdout.contains("Layer: primary"));
    assert!(stdout.contains("Layer: alternate"));
    assert!(stdout.contains("KeyA=\u{07CA}"));
    assert!(stdout.contains("KeyA=\u{07EE}"));
}

#[test]
fn test_layout_single_layer_json() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["layout", "--layer", "alternate", "--json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    let layers = result["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0]["id"], "alternate");
    assert_eq!(layers[0]["rows"][2][1]["key"], "KeyA");
    assert_eq!(layers[0]["rows"][2][1]["label"], "\u{07EE}");
}

#[test]
fn test_layout_uses_configured_file() {
    let config_dir = TempDir::new().unwrap();
    let (layout, _layout_dir) = write_temp_file("tiny.toml", TINY_LAYOUT_TOML);

    let set = isolated_command(
        &["config", "set", "--layout-file", layout.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        set.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&set.stderr)
    );

    let output = isolated_command(&["layout", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["name"], "Tiny");
    assert_eq!(result["keys"], 6);
}

#[test]
fn test_layout_bad_layer_name() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["layout", "--layer", "third"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    // clap usage errors exit with 2
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_layout_missing_file_is_io_error() {
    let config_dir = TempDir::new().unwrap();
    let missing = config_dir.path().join("missing.toml");

    let output = isolated_command(
        &["layout", "--layout", missing.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
