//! Built-in N'Ko layout.
//!
//! Rows follow a 60% ANSI board. The shift row is the reference row the
//! others are aligned against.

use super::layer::Layer;
use super::layout_table::{LayoutError, LayoutTable};
use super::physical_key::PhysicalKey::{
    self, AltLeft, AltRight, Backquote, Backslash, Backspace, BracketLeft, BracketRight, CapsLock,
    Comma, CommandLeft, CommandRight, ControlLeft, ControlRight, Digit0, Digit1, Digit2, Digit3,
    Digit4, Digit5, Digit6, Digit7, Digit8, Digit9, Enter, Equal, KeyA, KeyB, KeyC, KeyD, KeyE,
    KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU,
    KeyV, KeyW, KeyX, KeyY, KeyZ, Minus, Period, Quote, Semicolon, ShiftLeft, ShiftRight, Slash,
    Space, Tab,
};

/// Name of the built-in layout.
pub const NKO_LAYOUT_NAME: &str = "N'Ko";

const KEYS: [&[PhysicalKey]; 5] = [
    &[
        Backquote, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9, Digit0,
        Minus, Equal, Backspace,
    ],
    &[
        Tab, KeyQ, KeyW, KeyE, KeyR, KeyT, KeyY, KeyU, KeyI, KeyO, KeyP, BracketLeft, BracketRight,
        Backslash,
    ],
    &[
        CapsLock, KeyA, KeyS, KeyD, KeyF, KeyG, KeyH, KeyJ, KeyK, KeyL, Semicolon, Quote, Enter,
    ],
    &[
        ShiftLeft, KeyZ, KeyX, KeyC, KeyV, KeyB, KeyN, KeyM, Comma, Period, Slash, ShiftRight,
    ],
    &[
        ControlLeft,
        CommandLeft,
        AltLeft,
        Space,
        AltRight,
        CommandRight,
        ControlRight,
    ],
];

const BOTTOM_ROW: &[&str] = &["Ctrl", "Cmd", "Alt", "Space", "Alt", "Cmd", "Ctrl"];

// Digits, letters and tone marks.
const PRIMARY: [&[&str]; 5] = [
    &[
        "\u{07F7}", "\u{07C1}", "\u{07C2}", "\u{07C3}", "\u{07C4}", "\u{07C5}", "\u{07C6}",
        "\u{07C7}", "\u{07C8}", "\u{07C9}", "\u{07C0}", "\u{07FA}", "=", "Backspace",
    ],
    &[
        "Tab", "\u{07D2}", "\u{07E5}", "\u{07CB}", "\u{07D9}", "\u{07D5}", "\u{07E6}", "\u{07CE}",
        "\u{07CC}", "\u{07CF}", "\u{07D4}", "[", "]", "\\",
    ],
    &[
        "Caps", "\u{07CA}", "\u{07DB}", "\u{07D8}", "\u{07DD}", "\u{07DC}", "\u{07E4}", "\u{07D6}",
        "\u{07DE}", "\u{07DF}", "\u{07D1}", "\u{07F4}", "Enter",
    ],
    &[
        "Shift", "\u{07E2}", "\u{07D0}", "\u{07D7}", "\u{07CD}", "\u{07D3}", "\u{07E3}", "\u{07E1}",
        "\u{07F8}", ".", "/", "Shift",
    ],
    BOTTOM_ROW,
];

// Punctuation, combining marks and rarer letters. KeyT is left blank.
const ALTERNATE: [&[&str]; 5] = [
    &[
        "~", "\u{07F9}", "@", "#", "$", "%", "^", "&", "*", "(", ")", "_", "+", "Backspace",
    ],
    &[
        "Tab", "\u{07F6}", "\u{07FD}", "\u{07FA}", "\u{07DA}", "", "\u{07E7}", "\u{2039}",
        "\u{203A}", "\u{FD3E}", "\u{FD3F}", "{", "}", "|",
    ],
    &[
        "Caps", "\u{07EE}", "\u{07EF}", "\u{07F0}", "\u{07F1}", "\u{07F3}", "\u{07F2}", "\u{07EB}",
        "\u{07EC}", "\u{07ED}", ":", "\u{07F5}", "Enter",
    ],
    &[
        "Shift", "\u{07E7}", "\u{07EA}", "\u{07E9}", "\u{07FE}", "\u{07E8}", "\u{07E0}", "\u{07FF}",
        "\u{00AB}", "\u{00BB}", "\u{061F}", "Shift",
    ],
    BOTTOM_ROW,
];

impl LayoutTable {
    /// Builds the built-in N'Ko layout.
    ///
    /// # Errors
    ///
    /// Only fails if the compiled-in tables are out of alignment.
    pub fn nko() -> Result<Self, LayoutError> {
        Self::new(
            NKO_LAYOUT_NAME,
            KEYS.iter().map(|row| row.to_vec()).collect(),
            Layer::new("N'Ko", &PRIMARY),
            Layer::new("N'Ko Symbols", &ALTERNATE),
        )
    }
}
