//! Tracing setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a daily rolling
//! file under the config directory. Headless CLI commands log to stderr.
//! `RUST_LOG` overrides the configured level in both cases.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LoggingConfig};

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Installs a file logger for interactive sessions.
///
/// Returns `None` when logging is disabled. The returned guard must live
/// until the program exits or buffered lines are lost.
pub fn init_file_logging(config: &Config) -> Result<Option<WorkerGuard>> {
    if !config.logging.enabled {
        return Ok(None);
    }

    let log_dir = Config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, crate::constants::LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::registry()
        .with(env_filter(&config.logging))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init();

    Ok(Some(guard))
}

/// Installs a stderr logger for CLI subcommands.
pub fn init_stderr_logging(config: &Config) {
    if !config.logging.enabled {
        return;
    }

    let _ = tracing_subscriber::registry()
        .with(env_filter(&config.logging))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
