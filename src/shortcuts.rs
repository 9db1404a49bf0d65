//! Application shortcuts.
//!
//! Shortcuts are checked before a key event is translated into a physical
//! key activation, so every binding here uses a chord or a key the on-screen
//! board does not have (function keys, Esc).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Application-level actions that are not key activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Leave the application
    Quit,
    /// Copy the whole buffer to the system clipboard
    CopyText,
    /// Empty the buffer
    ClearText,
    /// Toggle the help overlay
    ToggleHelp,
    /// Press the on-screen Shift key (the terminal never reports Shift alone)
    PressShift,
    /// Close the help overlay or dismiss a message
    Cancel,
}

impl Action {
    /// Short description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::CopyText => "Copy text to clipboard",
            Self::ClearText => "Clear text",
            Self::ToggleHelp => "Toggle this help",
            Self::PressShift => "Press Shift (switch layer)",
            Self::Cancel => "Close help / dismiss message",
        }
    }
}

/// Input context a binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Typing on the board
    Main,
    /// Help overlay is open
    Help,
}

/// A key plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Creates a new binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Binding matching a key event.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }

    /// Human-readable form, e.g. `Ctrl+Y`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::F(n) => format!("F{n}"),
            KeyCode::Esc => "Esc".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Lookup table from key bindings to actions.
pub struct ShortcutRegistry {
    bindings: HashMap<(ShortcutContext, KeyBinding), Action>,
    order: Vec<(ShortcutContext, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Creates a registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;
        use ShortcutContext::{Help, Main};

        self.register(Main, K::Esc, M::NONE, Action::Quit);
        self.register(Main, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(Main, K::Char('y'), M::CONTROL, Action::CopyText);
        self.register(Main, K::Char('l'), M::CONTROL, Action::ClearText);
        self.register(Main, K::F(1), M::NONE, Action::ToggleHelp);
        self.register(Main, K::F(2), M::NONE, Action::PressShift);

        self.register(Help, K::F(1), M::NONE, Action::ToggleHelp);
        self.register(Help, K::Esc, M::NONE, Action::Cancel);
        self.register(Help, K::Char('q'), M::CONTROL, Action::Quit);
    }

    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
        self.order.push((context, binding, action));
    }

    /// Looks up the action bound to an event in a context.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Bindings of a context in registration order, for help text.
    pub fn bindings_for(
        &self,
        context: ShortcutContext,
    ) -> impl Iterator<Item = (KeyBinding, Action)> + '_ {
        self.order
            .iter()
            .filter(move |(ctx, _, _)| *ctx == context)
            .map(|(_, binding, action)| (*binding, *action))
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        let event = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(
            registry.lookup(ShortcutContext::Main, event),
            Some(Action::CopyText)
        );

        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            registry.lookup(ShortcutContext::Help, event),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_plain_letters_are_not_shortcuts() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        assert_eq!(registry.lookup(ShortcutContext::Main, event), None);
    }

    #[test]
    fn test_binding_labels() {
        assert_eq!(
            KeyBinding::new(KeyCode::Char('q'), KeyModifiers::CONTROL).label(),
            "Ctrl+Q"
        );
        assert_eq!(KeyBinding::new(KeyCode::F(2), KeyModifiers::NONE).label(), "F2");
    }

    #[test]
    fn test_bindings_for_keeps_order() {
        let registry = ShortcutRegistry::new();
        let first = registry.bindings_for(ShortcutContext::Main).next().unwrap();
        assert_eq!(first.1, Action::Quit);
        assert_eq!(registry.bindings_for(ShortcutContext::Help).count(), 3);
    }
}
