//! Input controller: the layer/buffer state machine behind the keyboard.
//!
//! The controller owns the active layer and the text buffer. Hosts feed it
//! [`KeyMessage`]s and receive label and text updates through the
//! [`KeyboardHost`] trait; the controller never reads state back from the
//! host.

use std::sync::Arc;

use crate::models::{ControlAction, KeyRole, LayerId, LayoutTable, PhysicalKey};

/// Surface the controller pushes updates to.
pub trait KeyboardHost {
    /// Update the label shown on one visible key.
    fn set_key_label(&mut self, key: PhysicalKey, label: &str);

    /// Replace the display surface's text with the full buffer.
    fn set_display_text(&mut self, text: &str);

    /// Move input focus to the display surface.
    fn focus_display(&mut self);
}

/// Events the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMessage {
    /// A physical key was activated (pressed or clicked)
    Activated(PhysicalKey),
}

/// Mutable state owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Currently active layer
    pub active_layer: LayerId,
    /// Accumulated text
    pub buffer: String,
}

/// Keyboard state machine.
///
/// Two states, [`LayerId::Primary`] and [`LayerId::Alternate`]. Shift toggles
/// between them. A glyph typed while the alternate layer is active drops
/// back to the primary layer, so the alternate layer lasts one character.
pub struct InputController<H: KeyboardHost> {
    table: Arc<LayoutTable>,
    state: InputState,
    host: H,
}

impl<H: KeyboardHost> InputController<H> {
    /// Creates a controller on the primary layer with an empty buffer.
    pub fn new(table: Arc<LayoutTable>, host: H) -> Self {
        Self {
            table,
            state: InputState::default(),
            host,
        }
    }

    /// Handles one event.
    pub fn handle(&mut self, message: KeyMessage) {
        match message {
            KeyMessage::Activated(key) => self.on_key_activated(key),
        }
    }

    /// Applies a single key activation.
    pub fn on_key_activated(&mut self, key: PhysicalKey) {
        let Some(position) = self.table.position_of(key) else {
            tracing::debug!(%key, "ignoring key not present in layout");
            return;
        };

        match self.table.role_of(key) {
            KeyRole::Glyph => {
                let layer = self.state.active_layer;
                if let Some(glyph) =
                    self.table
                        .glyph_at(layer, position.row as usize, position.col as usize)
                {
                    self.state.buffer.push_str(glyph);
                    tracing::trace!(%key, %layer, glyph, "appended glyph");
                }
                if layer == LayerId::Alternate {
                    self.toggle_layer();
                }
            }
            KeyRole::Control(ControlAction::Space) => self.state.buffer.push(' '),
            KeyRole::Control(ControlAction::Backspace) => {
                if self.state.buffer.pop().is_none() {
                    tracing::trace!("backspace on empty buffer");
                }
            }
            KeyRole::Control(ControlAction::Enter) => self.state.buffer.push('\n'),
            KeyRole::Control(ControlAction::Shift) => {
                self.toggle_layer();
                return;
            }
            KeyRole::Inert => {
                tracing::trace!(%key, "inert key");
                return;
            }
        }

        self.host.set_display_text(&self.state.buffer);
        self.host.focus_display();
    }

    /// Switches to the other layer and relabels every key.
    fn toggle_layer(&mut self) {
        self.state.active_layer = self.state.active_layer.toggled();
        tracing::debug!(layer = %self.state.active_layer, "layer toggled");
        self.sync_labels();
    }

    /// Pushes the active layer's label for every key to the host.
    pub fn sync_labels(&mut self) {
        let layer = self.state.active_layer;
        for (position, key) in self.table.iter_keys() {
            let label = self
                .table
                .glyph_at(layer, position.row as usize, position.col as usize)
                .unwrap_or_default();
            self.host.set_key_label(key, label);
        }
    }

    /// Empties the buffer and pushes the empty text to the host.
    pub fn clear(&mut self) {
        self.state.buffer.clear();
        self.host.set_display_text(&self.state.buffer);
        self.host.focus_display();
    }

    /// Currently active layer.
    pub fn active_layer(&self) -> LayerId {
        self.state.active_layer
    }

    /// Accumulated text.
    pub fn buffer(&self) -> &str {
        &self.state.buffer
    }

    /// Full controller state.
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Layout table the controller reads from.
    pub fn table(&self) -> &LayoutTable {
        &self.table
    }

    /// Host the controller pushes updates to.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }
}
