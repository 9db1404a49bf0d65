//! NkoBoard - on-screen N'Ko keyboard for the terminal
//!
//! Runs the interactive keyboard by default; subcommands give headless
//! access to layouts, typing and configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nkoboard::cli::{ConfigArgs, LayoutArgs, TypeArgs, ValidateArgs};
use nkoboard::config::Config;
use nkoboard::constants::{APP_BINARY_NAME, APP_NAME};
use nkoboard::services::LayoutService;
use nkoboard::{logging, tui};
use std::path::PathBuf;

/// NkoBoard - on-screen N'Ko keyboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Layout file (TOML or JSON) to type with instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layout grid, or export it to a file
    Layout(LayoutArgs),
    /// Check a layout file for shape errors
    Validate(ValidateArgs),
    /// Type a sequence of physical keys and print the resulting text
    Type(TypeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_keyboard(cli.layout);
    };

    let config = Config::load().unwrap_or_default();
    logging::init_stderr_logging(&config);

    let result = match command {
        Command::Layout(mut args) => {
            args.layout = args.layout.or(cli.layout);
            args.execute()
        }
        Command::Validate(args) => args.execute(),
        Command::Type(mut args) => {
            args.layout = args.layout.or(cli.layout);
            args.execute()
        }
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }

    Ok(())
}

/// Runs the interactive keyboard.
fn run_keyboard(layout: Option<PathBuf>) -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            eprintln!();
            eprintln!("Fix or remove the configuration file, or reset the layout with:");
            eprintln!("  {APP_BINARY_NAME} config set --builtin-layout");
            std::process::exit(1);
        }
    };

    let _log_guard = logging::init_file_logging(&config)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting {APP_NAME}");

    // Fail before touching the terminal so the error stays readable
    let table = LayoutService::resolve(layout.as_deref(), &config)?;

    let mut app_state = tui::AppState::new(table, config);
    let mut terminal = tui::setup_terminal()?;

    let result = tui::run_tui(&mut app_state, &mut terminal);

    tui::restore_terminal(terminal)?;

    // Check for errors
    result
}
