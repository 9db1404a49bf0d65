//! Color themes for dark and light terminals.
//!
//! Auto mode asks the OS (via `dark-light`) which palette to use.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic colors used by the keyboard TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Highlights (pressed key flash, active layer badge)
    pub accent: Color,
    /// Status messages that report success
    pub success: Color,
    /// Error messages
    pub error: Color,

    /// Main text
    pub text: Color,
    /// Hints and dim text
    pub text_muted: Color,

    /// Screen background
    pub background: Color,

    /// Glyph key label on the primary layer
    pub glyph: Color,
    /// Glyph key label on the alternate layer
    pub glyph_alternate: Color,
    /// Control key labels (Shift, Space, Enter, Backspace)
    pub control: Color,
    /// Inert key labels (Tab, Caps, Ctrl, Cmd, Alt)
    pub inert: Color,
    /// Key border
    pub key_border: Color,
}

impl Theme {
    /// Detects the OS theme and returns the matching palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the palette for a configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,

            glyph: Color::White,
            glyph_alternate: Color::LightMagenta,
            control: Color::Cyan,
            inert: Color::DarkGray,
            key_border: Color::Gray,
        }
    }

    /// Palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,

            glyph: Color::Black,
            glyph_alternate: Color::Magenta,
            control: Color::Blue,
            inert: Color::Rgb(150, 150, 150),
            key_border: Color::Rgb(120, 120, 120),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
