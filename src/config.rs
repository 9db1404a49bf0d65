//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "NKOBOARD_CONFIG_DIR";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err("Invalid theme mode. Must be 'auto', 'light', or 'dark'".to_string()),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Custom layout file (TOML or JSON); the built-in N'Ko layout is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Align the display text to the right (N'Ko is written right to left)
    #[serde(default = "default_right_to_left")]
    pub right_to_left: bool,
}

const fn default_right_to_left() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
            right_to_left: default_right_to_left(),
        }
    }
}

/// Log file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write a log file at all
    pub enabled: bool,
    /// Default filter directive (overridden by `RUST_LOG`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/NkoBoard/config.toml`
/// - macOS: `~/Library/Application Support/NkoBoard/config.toml`
/// - Windows: `%APPDATA%\NkoBoard\config.toml`
///
/// `NKOBOARD_CONFIG_DIR` overrides the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("NkoBoard");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory log files are written to.
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "configuration saved");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `layout_file` (if set) exists
    /// - `logging.level` is a valid filter directive
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.paths.layout_file {
            if !path.exists() {
                anyhow::bail!("Layout file does not exist: {}", path.display());
            }
        }

        tracing_subscriber::EnvFilter::try_new(&self.logging.level).with_context(|| {
            format!("Invalid logging level directive: '{}'", self.logging.level)
        })?;

        Ok(())
    }
}
