//! Translation of terminal key events into physical key activations.
//!
//! Terminals report characters, not key positions, so characters are mapped
//! back to the US-QWERTY key that produces them. A shifted character (e.g.
//! `Q` or `?`) becomes a Shift press followed by the key press, which types
//! one alternate-layer glyph and falls back to the primary layer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::PhysicalKey;

/// A key activation derived from a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Physical key to activate
    pub key: PhysicalKey,
    /// Activate Shift first
    pub shifted: bool,
}

impl KeyPress {
    /// A press without Shift.
    #[must_use]
    pub const fn plain(key: PhysicalKey) -> Self {
        Self {
            key,
            shifted: false,
        }
    }

    /// Physical activations in the order they should be sent, pressing
    /// `shift` first when the press is shifted. A layout without a Shift key
    /// gets the plain key.
    pub fn activations(self, shift: Option<PhysicalKey>) -> impl Iterator<Item = PhysicalKey> {
        shift
            .filter(|_| self.shifted)
            .into_iter()
            .chain(std::iter::once(self.key))
    }
}

/// Maps a terminal key event onto a physical key press.
///
/// Events carrying Ctrl or Alt never map; they belong to shortcuts.
#[must_use]
pub fn translate(event: KeyEvent) -> Option<KeyPress> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match event.code {
        KeyCode::Backspace => Some(KeyPress::plain(PhysicalKey::Backspace)),
        KeyCode::Enter => Some(KeyPress::plain(PhysicalKey::Enter)),
        KeyCode::Tab => Some(KeyPress::plain(PhysicalKey::Tab)),
        KeyCode::CapsLock => Some(KeyPress::plain(PhysicalKey::CapsLock)),
        KeyCode::Char(' ') => Some(KeyPress::plain(PhysicalKey::Space)),
        KeyCode::Char(c) => {
            let key = PhysicalKey::from_qwerty_char(c)?;
            Some(KeyPress {
                key,
                shifted: PhysicalKey::is_shifted_qwerty_char(c),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyPress> {
        translate(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_letters_map_by_position() {
        assert_eq!(
            press(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(KeyPress::plain(PhysicalKey::KeyA))
        );
        assert_eq!(
            press(KeyCode::Char(';'), KeyModifiers::NONE),
            Some(KeyPress::plain(PhysicalKey::Semicolon))
        );
    }

    #[test]
    fn test_shifted_characters() {
        let shifted = press(KeyCode::Char('A'), KeyModifiers::SHIFT).unwrap();
        assert_eq!(shifted.key, PhysicalKey::KeyA);
        assert!(shifted.shifted);
        assert_eq!(
            shifted
                .activations(Some(PhysicalKey::ShiftLeft))
                .collect::<Vec<_>>(),
            vec![PhysicalKey::ShiftLeft, PhysicalKey::KeyA]
        );
        assert_eq!(
            shifted
                .activations(Some(PhysicalKey::ShiftRight))
                .collect::<Vec<_>>(),
            vec![PhysicalKey::ShiftRight, PhysicalKey::KeyA]
        );
        assert_eq!(
            shifted.activations(None).collect::<Vec<_>>(),
            vec![PhysicalKey::KeyA]
        );

        // Some terminals omit the SHIFT modifier on symbols
        let question = press(KeyCode::Char('?'), KeyModifiers::NONE).unwrap();
        assert_eq!(question.key, PhysicalKey::Slash);
        assert!(question.shifted);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            Some(KeyPress::plain(PhysicalKey::Backspace))
        );
        assert_eq!(
            press(KeyCode::Char(' '), KeyModifiers::NONE),
            Some(KeyPress::plain(PhysicalKey::Space))
        );
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE)
                .unwrap()
                .activations(Some(PhysicalKey::ShiftLeft))
                .count(),
            1
        );
    }

    #[test]
    fn test_chords_and_unmapped_keys() {
        assert_eq!(press(KeyCode::Char('y'), KeyModifiers::CONTROL), None);
        assert_eq!(press(KeyCode::Left, KeyModifiers::NONE), None);
        assert_eq!(press(KeyCode::Char('\u{07CA}'), KeyModifiers::NONE), None);
    }
}
