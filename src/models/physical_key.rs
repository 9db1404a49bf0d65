//! Physical key identities and their fixed roles.
//!
//! A [`PhysicalKey`] names a key by where it sits on a standard ANSI board,
//! never by the character the operating system would produce for it. Names
//! follow the DOM `KeyboardEvent.code` convention (`KeyQ`, `Digit1`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a key in the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row (0-based, top row first)
    pub row: u8,
    /// Column within the row (0-based)
    pub col: u8,
}

impl Position {
    /// Creates a new Position with the given row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed action performed by a control key, identical on every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAction {
    /// Insert a single space
    Space,
    /// Delete the last character of the buffer
    Backspace,
    /// Insert a newline
    Enter,
    /// Toggle the active layer
    Shift,
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space => write!(f, "Space"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Enter => write!(f, "Enter"),
            Self::Shift => write!(f, "Shift"),
        }
    }
}

/// What activating a physical key does, independent of the active layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Emits the active layer's glyph at this position
    Glyph,
    /// Performs a fixed control action
    Control(ControlAction),
    /// Shown on the board but does nothing (Tab, Caps, Ctrl, Cmd, Alt)
    Inert,
}

macro_rules! physical_keys {
    ($($variant:ident => $code:literal,)+) => {
        /// A physical key position on a standard keyboard.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum PhysicalKey {
            $($variant,)+
        }

        impl PhysicalKey {
            /// Every physical key, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Canonical code name (e.g. `"KeyQ"`).
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl FromStr for PhysicalKey {
            type Err = UnknownKeyName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(UnknownKeyName(s.to_string())),
                }
            }
        }
    };
}

physical_keys! {
    Backquote => "Backquote",
    Digit1 => "Digit1",
    Digit2 => "Digit2",
    Digit3 => "Digit3",
    Digit4 => "Digit4",
    Digit5 => "Digit5",
    Digit6 => "Digit6",
    Digit7 => "Digit7",
    Digit8 => "Digit8",
    Digit9 => "Digit9",
    Digit0 => "Digit0",
    Minus => "Minus",
    Equal => "Equal",
    Backspace => "Backspace",
    Tab => "Tab",
    KeyQ => "KeyQ",
    KeyW => "KeyW",
    KeyE => "KeyE",
    KeyR => "KeyR",
    KeyT => "KeyT",
    KeyY => "KeyY",
    KeyU => "KeyU",
    KeyI => "KeyI",
    KeyO => "KeyO",
    KeyP => "KeyP",
    BracketLeft => "BracketLeft",
    BracketRight => "BracketRight",
    Backslash => "Backslash",
    CapsLock => "CapsLock",
    KeyA => "KeyA",
    KeyS => "KeyS",
    KeyD => "KeyD",
    KeyF => "KeyF",
    KeyG => "KeyG",
    KeyH => "KeyH",
    KeyJ => "KeyJ",
    KeyK => "KeyK",
    KeyL => "KeyL",
    Semicolon => "Semicolon",
    Quote => "Quote",
    Enter => "Enter",
    ShiftLeft => "ShiftLeft",
    KeyZ => "KeyZ",
    KeyX => "KeyX",
    KeyC => "KeyC",
    KeyV => "KeyV",
    KeyB => "KeyB",
    KeyN => "KeyN",
    KeyM => "KeyM",
    Comma => "Comma",
    Period => "Period",
    Slash => "Slash",
    ShiftRight => "ShiftRight",
    ControlLeft => "ControlLeft",
    CommandLeft => "CommandLeft",
    AltLeft => "AltLeft",
    Space => "Space",
    AltRight => "AltRight",
    CommandRight => "CommandRight",
    ControlRight => "ControlRight",
}

impl PhysicalKey {
    /// Returns the fixed role of this key.
    #[must_use]
    pub const fn role(self) -> KeyRole {
        match self {
            Self::Space => KeyRole::Control(ControlAction::Space),
            Self::Backspace => KeyRole::Control(ControlAction::Backspace),
            Self::Enter => KeyRole::Control(ControlAction::Enter),
            Self::ShiftLeft | Self::ShiftRight => KeyRole::Control(ControlAction::Shift),
            Self::Tab
            | Self::CapsLock
            | Self::ControlLeft
            | Self::ControlRight
            | Self::CommandLeft
            | Self::CommandRight
            | Self::AltLeft
            | Self::AltRight => KeyRole::Inert,
            _ => KeyRole::Glyph,
        }
    }

    /// Returns the control action of this key, if it has one.
    #[must_use]
    pub const fn control_action(self) -> Option<ControlAction> {
        match self.role() {
            KeyRole::Control(action) => Some(action),
            KeyRole::Glyph | KeyRole::Inert => None,
        }
    }

    /// Whether activating this key emits a layer glyph.
    #[must_use]
    pub const fn is_glyph_key(self) -> bool {
        matches!(self.role(), KeyRole::Glyph)
    }

    /// Whether this is one of the two Shift keys.
    #[must_use]
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }

    /// Relative on-screen width of the key (48 = one standard key).
    #[must_use]
    pub const fn width_units(self) -> u16 {
        match self {
            Self::Backspace => 77,
            Self::Tab => 76,
            Self::CapsLock | Self::Enter => 89,
            Self::ShiftLeft | Self::ShiftRight => 116,
            Self::ControlLeft | Self::ControlRight => 78,
            Self::CommandLeft | Self::CommandRight | Self::AltLeft | Self::AltRight => 58,
            Self::Space => 355,
            _ => 48,
        }
    }

    /// Resolves the physical key that produces `c` on a US-QWERTY board.
    ///
    /// Shifted characters resolve to the same key as their unshifted form,
    /// so `'Q'` and `'q'` both give [`PhysicalKey::KeyQ`].
    #[must_use]
    pub fn from_qwerty_char(c: char) -> Option<Self> {
        let key = match c.to_ascii_lowercase() {
            '`' | '~' => Self::Backquote,
            '1' | '!' => Self::Digit1,
            '2' | '@' => Self::Digit2,
            '3' | '#' => Self::Digit3,
            '4' | '$' => Self::Digit4,
            '5' | '%' => Self::Digit5,
            '6' | '^' => Self::Digit6,
            '7' | '&' => Self::Digit7,
            '8' | '*' => Self::Digit8,
            '9' | '(' => Self::Digit9,
            '0' | ')' => Self::Digit0,
            '-' | '_' => Self::Minus,
            '=' | '+' => Self::Equal,
            'q' => Self::KeyQ,
            'w' => Self::KeyW,
            'e' => Self::KeyE,
            'r' => Self::KeyR,
            't' => Self::KeyT,
            'y' => Self::KeyY,
            'u' => Self::KeyU,
            'i' => Self::KeyI,
            'o' => Self::KeyO,
            'p' => Self::KeyP,
            '[' | '{' => Self::BracketLeft,
            ']' | '}' => Self::BracketRight,
            '\\' | '|' => Self::Backslash,
            'a' => Self::KeyA,
            's' => Self::KeyS,
            'd' => Self::KeyD,
            'f' => Self::KeyF,
            'g' => Self::KeyG,
            'h' => Self::KeyH,
            'j' => Self::KeyJ,
            'k' => Self::KeyK,
            'l' => Self::KeyL,
            ';' | ':' => Self::Semicolon,
            '\'' | '"' => Self::Quote,
            'z' => Self::KeyZ,
            'x' => Self::KeyX,
            'c' => Self::KeyC,
            'v' => Self::KeyV,
            'b' => Self::KeyB,
            'n' => Self::KeyN,
            'm' => Self::KeyM,
            ',' | '<' => Self::Comma,
            '.' | '>' => Self::Period,
            '/' | '?' => Self::Slash,
            ' ' => Self::Space,
            _ => return None,
        };
        Some(key)
    }

    /// Whether `c` needs Shift held on a US-QWERTY board.
    #[must_use]
    pub fn is_shifted_qwerty_char(c: char) -> bool {
        c.is_ascii_uppercase() || "~!@#$%^&*()_+{}|:\"<>?".contains(c)
    }
}

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for PhysicalKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PhysicalKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Error returned when a key code name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeyName(pub String);

impl fmt::Display for UnknownKeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown physical key name '{}'", self.0)
    }
}

impl std::error::Error for UnknownKeyName {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trips_through_from_str() {
        for key in PhysicalKey::ALL {
            assert_eq!(key.code().parse::<PhysicalKey>(), Ok(*key));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "KeyÆ".parse::<PhysicalKey>().unwrap_err();
        assert_eq!(err.to_string(), "unknown physical key name 'KeyÆ'");
    }

    #[test]
    fn test_roles() {
        assert_eq!(PhysicalKey::KeyQ.role(), KeyRole::Glyph);
        assert_eq!(
            PhysicalKey::ShiftRight.control_action(),
            Some(ControlAction::Shift)
        );
        assert_eq!(PhysicalKey::Space.control_action(), Some(ControlAction::Space));
        assert_eq!(PhysicalKey::CapsLock.role(), KeyRole::Inert);
        assert!(!PhysicalKey::Tab.is_glyph_key());
    }

    #[test]
    fn test_qwerty_shifted_chars_share_a_key() {
        assert_eq!(PhysicalKey::from_qwerty_char('q'), Some(PhysicalKey::KeyQ));
        assert_eq!(PhysicalKey::from_qwerty_char('Q'), Some(PhysicalKey::KeyQ));
        assert_eq!(PhysicalKey::from_qwerty_char('?'), Some(PhysicalKey::Slash));
        assert_eq!(PhysicalKey::from_qwerty_char('߀'), None);
        assert!(PhysicalKey::is_shifted_qwerty_char('Q'));
        assert!(PhysicalKey::is_shifted_qwerty_char('?'));
        assert!(!PhysicalKey::is_shifted_qwerty_char('/'));
    }

    #[test]
    fn test_serde_uses_code_names() {
        let json = serde_json::to_string(&PhysicalKey::BracketLeft).unwrap();
        assert_eq!(json, "\"BracketLeft\"");
        let key: PhysicalKey = serde_json::from_str("\"Digit0\"").unwrap();
        assert_eq!(key, PhysicalKey::Digit0);
    }
}
