//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the configuration file path
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Custom layout file used instead of the built-in N'Ko layout
    #[arg(long, value_name = "FILE", conflicts_with = "builtin_layout")]
    layout_file: Option<PathBuf>,

    /// Go back to the built-in N'Ko layout
    #[arg(long)]
    builtin_layout: bool,

    /// Log filter (e.g. info, debug, nkoboard=trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Right-align the typed text
    #[arg(long, value_name = "BOOL")]
    rtl: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    ui: UiOutput,
    logging: LoggingOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_file: Option<String>,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    right_to_left: bool,
    show_help_on_startup: bool,
}

#[derive(Serialize, Debug)]
struct LoggingOutput {
    enabled: bool,
    level: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none()
            && self.layout_file.is_none()
            && !self.builtin_layout
            && self.log_level.is_none()
            && self.rtl.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --layout-file, --builtin-layout, --log-level, or --rtl",
            ));
        }

        // A broken config is replaced rather than blocking the repair
        let mut config = Config::load().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable configuration: {e:#}");
            Config::default()
        });

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme.parse::<ThemeMode>().map_err(CliError::validation)?;
        }

        if let Some(path) = &self.layout_file {
            if !path.exists() {
                return Err(CliError::validation(format!(
                    "Layout file does not exist: {}",
                    path.display()
                )));
            }
            // Store an absolute path so the setting works from any directory
            let path = path.canonicalize().map_err(|e| {
                CliError::io(format!("Failed to resolve {}: {e}", path.display()))
            })?;
            config.paths.layout_file = Some(path);
        }

        if self.builtin_layout {
            config.paths.layout_file = None;
        }

        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }

        if let Some(rtl) = self.rtl {
            config.ui.right_to_left = rtl;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            layout_file: config
                .paths
                .layout_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            right_to_left: config.ui.right_to_left,
            show_help_on_startup: config.ui.show_help_on_startup,
        },
        logging: LoggingOutput {
            enabled: config.logging.enabled,
            level: config.logging.level.clone(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("NkoBoard Configuration");
    println!("======================");
    println!();

    println!("Paths:");
    if let Some(layout) = &config.paths.layout_file {
        println!("  Layout File: {}", layout.display());
    } else {
        println!("  Layout File: (built-in N'Ko)");
    }
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Right to Left: {}", config.ui.right_to_left);
    println!("  Help on Startup: {}", config.ui.show_help_on_startup);
    println!();

    println!("Logging:");
    println!("  Enabled: {}", config.logging.enabled);
    println!("  Level: {}", config.logging.level);
}
