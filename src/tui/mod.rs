//! Terminal user interface: the host side of the keyboard.
//!
//! This module contains the main TUI loop, `AppState`, the [`Screen`] host
//! the controller pushes into, and the widgets that draw it.

// Terminal coordinates are u16
#![allow(clippy::cast_lossless)]

pub mod clipboard;
pub mod display;
pub mod input;
pub mod keyboard;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::controller::{InputController, KeyMessage, KeyboardHost};
use crate::models::{LayoutTable, PhysicalKey};
use crate::shortcuts::{Action, ShortcutContext, ShortcutRegistry};

pub use display::DisplayWidget;
pub use keyboard::KeyboardWidget;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Frames a pressed key stays highlighted.
const FLASH_FRAMES: u8 = 2;

/// What the terminal currently shows: key labels and display text.
///
/// This is the view the controller writes into. It is never read back to
/// decide what a key does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    labels: HashMap<PhysicalKey, String>,
    display_text: String,
    display_focused: bool,
}

impl Screen {
    /// Label shown on a key (empty when none was pushed).
    #[must_use]
    pub fn label(&self, key: PhysicalKey) -> &str {
        self.labels.get(&key).map_or("", String::as_str)
    }

    /// Text shown in the display area.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Whether the display area has focus.
    #[must_use]
    pub const fn display_focused(&self) -> bool {
        self.display_focused
    }
}

impl KeyboardHost for Screen {
    fn set_key_label(&mut self, key: PhysicalKey, label: &str) {
        self.labels.insert(key, label.to_string());
    }

    fn set_display_text(&mut self, text: &str) {
        self.display_text.clear();
        self.display_text.push_str(text);
    }

    fn focus_display(&mut self) {
        self.display_focused = true;
    }
}

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar
    pub title: Rect,
    /// Text display
    pub display: Rect,
    /// On-screen keyboard
    pub keyboard: Rect,
    /// Status bar
    pub status: Rect,
}

impl AppLayout {
    /// Splits the full terminal area.
    #[must_use]
    pub fn split(area: Rect, table: &LayoutTable) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(display::DISPLAY_HEIGHT),
                Constraint::Length(KeyboardWidget::required_height(table)),
                Constraint::Length(4),
            ])
            .split(area);

        Self {
            title: chunks[0],
            display: chunks[1],
            keyboard: chunks[2],
            status: chunks[3],
        }
    }
}

/// Application state - single source of truth
///
/// Widgets read from this state immutably; only the event handlers below
/// modify it.
pub struct AppState {
    /// Keyboard state machine, owning the [`Screen`] host
    pub controller: InputController<Screen>,
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    /// Shortcut bindings
    pub shortcuts: ShortcutRegistry,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Whether the help overlay is open
    pub show_help: bool,
    /// Key highlighted after activation, with remaining frames
    pub flash_highlight: Option<(PhysicalKey, u8)>,
    /// Last known terminal area, for mouse hit testing
    pub viewport: Rect,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state and labels every key with its primary glyph.
    pub fn new(table: Arc<LayoutTable>, config: Config) -> Self {
        let mut controller = InputController::new(table, Screen::default());
        controller.sync_labels();

        let theme = Theme::from_mode(config.ui.theme_mode);
        let show_help = config.ui.show_help_on_startup;

        Self {
            controller,
            config,
            theme,
            shortcuts: ShortcutRegistry::new(),
            status_message: String::new(),
            error_message: None,
            show_help,
            flash_highlight: None,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    /// What the terminal shows.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        self.controller.host()
    }

    /// Key currently highlighted, if any.
    #[must_use]
    pub fn flash_key(&self) -> Option<PhysicalKey> {
        self.flash_highlight.map(|(key, _)| key)
    }

    /// Sends a key activation to the controller.
    pub fn activate(&mut self, key: PhysicalKey) {
        self.status_message.clear();
        self.error_message = None;
        self.controller.handle(KeyMessage::Activated(key));
        self.flash_highlight = Some((key, FLASH_FRAMES));
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(%error, "showing error");
        self.error_message = Some(error);
    }

    /// Runs an application action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::CopyText => {
                let text = self.controller.buffer().to_string();
                match clipboard::copy_text(&text) {
                    Ok(()) => {
                        self.set_status(format!("Copied: {}", clipboard::preview(&text, 40)));
                    }
                    Err(e) => self.set_error(e.to_string()),
                }
            }
            Action::ClearText => {
                self.controller.clear();
                self.set_status("Text cleared");
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::PressShift => match self.controller.table().shift_key() {
                Some(shift) => self.activate(shift),
                None => self.set_error("This layout has no Shift key"),
            },
            Action::Cancel => {
                self.show_help = false;
                self.error_message = None;
            }
        }
    }

    /// Counts down the press highlight.
    fn tick(&mut self) {
        if let Some((key, frames)) = self.flash_highlight {
            self.flash_highlight = (frames > 1).then_some((key, frames - 1));
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    tracing::info!("keyboard session started");

    while !state.should_quit {
        state.tick();

        let size = terminal.size().context("Failed to read terminal size")?;
        state.viewport = Rect::new(0, 0, size.width, size.height);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(state, key);
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                // Resize and the rest re-render on the next loop
                _ => {}
            }
        }
    }

    tracing::info!(
        chars = state.controller.buffer().chars().count(),
        "keyboard session ended"
    );
    Ok(())
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) {
    let context = if state.show_help {
        ShortcutContext::Help
    } else {
        ShortcutContext::Main
    };

    if let Some(action) = state.shortcuts.lookup(context, key) {
        state.apply(action);
        return;
    }

    // Board input is blocked while help is shown
    if state.show_help {
        return;
    }

    if let Some(press) = input::translate(key) {
        let shift = state.controller.table().shift_key();
        for physical in press.activations(shift) {
            state.activate(physical);
        }
    }
}

/// Handle mouse clicks on on-screen keys
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || state.show_help {
        return;
    }

    let layout = AppLayout::split(state.viewport, state.controller.table());
    if let Some(key) = KeyboardWidget::hit_test(
        state.controller.table(),
        layout.keyboard,
        mouse.column,
        mouse.row,
    ) {
        state.activate(key);
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = AppLayout::split(f.area(), state.controller.table());

    render_title_bar(f, layout.title, state);
    DisplayWidget::render(f, layout.display, state);
    KeyboardWidget::render(f, layout.keyboard, state);
    StatusBar::render(f, layout.status, state, &state.theme);

    if state.show_help {
        render_help(f, state);
    }
}

/// Render title bar with layout name and active layer
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let table = state.controller.table();
    let title = format!(
        " {} | {} | Layer: {} ",
        crate::constants::APP_NAME,
        table.name(),
        state.controller.active_layer()
    );

    let title_widget = Paragraph::new(title)
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render the help overlay
fn render_help(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let area = centered_rect(60, 60, f.area());

    let mut lines = vec![
        Line::from(Span::styled(
            "Typing",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("  Type on your keyboard or click keys. Keys act by position,"),
        Line::from("  so the Q key types the glyph shown on Q."),
        Line::from("  Shift switches to the symbol layer for one character;"),
        Line::from("  a shifted key (e.g. Shift+Q) types one symbol directly."),
        Line::from(""),
        Line::from(Span::styled(
            "Shortcuts",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    for (binding, action) in state.shortcuts.bindings_for(ShortcutContext::Main) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<8}", binding.label()),
                Style::default().fg(theme.accent),
            ),
            Span::raw(action.description()),
        ]));
    }

    let help = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .title(" Help (F1/Esc to close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
