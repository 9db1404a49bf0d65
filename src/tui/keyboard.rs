//! Keyboard widget for rendering the on-screen keys

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::{KeyRole, LayerId, LayoutTable, PhysicalKey};

/// Height of one key row in terminal cells (top border, label, bottom border).
pub const KEY_HEIGHT: u16 = 3;

/// A key and the screen cell rectangle it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRect {
    /// The physical key
    pub key: PhysicalKey,
    /// Screen area
    pub area: Rect,
}

/// Keyboard widget renders the visual keyboard layout
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Height needed to draw every row of `table` inside a bordered block.
    #[must_use]
    pub fn required_height(table: &LayoutTable) -> u16 {
        let rows = u16::try_from(table.rows().len()).unwrap_or(u16::MAX);
        rows.saturating_mul(KEY_HEIGHT).saturating_add(2)
    }

    /// Lays out every key inside `area` (the outer bordered block).
    ///
    /// Key widths are proportional to [`PhysicalKey::width_units`]; each row
    /// is stretched to the full inner width, the last key absorbing rounding.
    #[must_use]
    pub fn key_rects(table: &LayoutTable, area: Rect) -> Vec<KeyRect> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let mut rects = Vec::with_capacity(table.key_count());

        for (row_idx, row) in table.rows().iter().enumerate() {
            let y = inner.y + row_idx as u16 * KEY_HEIGHT;
            if y + KEY_HEIGHT > inner.y + inner.height {
                break;
            }

            let total_units: u32 = row.iter().map(|k| u32::from(k.width_units())).sum();
            if total_units == 0 || inner.width == 0 {
                continue;
            }

            let mut x = inner.x;
            let row_end = inner.x + inner.width;
            let mut consumed_units = 0u32;
            for (col_idx, key) in row.iter().enumerate() {
                consumed_units += u32::from(key.width_units());
                let end = if col_idx + 1 == row.len() {
                    row_end
                } else {
                    inner.x + (consumed_units * u32::from(inner.width) / total_units) as u16
                };
                let width = end.saturating_sub(x);
                rects.push(KeyRect {
                    key: *key,
                    area: Rect::new(x, y, width, KEY_HEIGHT),
                });
                x = end;
            }
        }

        rects
    }

    /// Finds the key under a screen cell.
    #[must_use]
    pub fn hit_test(table: &LayoutTable, area: Rect, column: u16, row: u16) -> Option<PhysicalKey> {
        Self::key_rects(table, area)
            .into_iter()
            .find(|rect| {
                column >= rect.area.x
                    && column < rect.area.x + rect.area.width
                    && row >= rect.area.y
                    && row < rect.area.y + rect.area.height
            })
            .map(|rect| rect.key)
    }

    /// Render the keyboard widget
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let table = state.controller.table();
        let layer = state.controller.active_layer();

        let title = format!(" {} | {} ", table.name(), table.layer(layer).name);
        let outer = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        f.render_widget(outer, area);

        for rect in Self::key_rects(table, area) {
            if rect.area.width < 3 {
                continue;
            }

            let label = state.screen().label(rect.key);
            let mut style = match table.role_of(rect.key) {
                KeyRole::Glyph if layer == LayerId::Alternate => {
                    Style::default().fg(theme.glyph_alternate)
                }
                KeyRole::Glyph => Style::default().fg(theme.glyph),
                KeyRole::Control(_) => Style::default().fg(theme.control),
                KeyRole::Inert => Style::default().fg(theme.inert),
            };
            let mut border = Style::default().fg(theme.key_border);
            if state.flash_key() == Some(rect.key) {
                style = style.fg(theme.background).bg(theme.accent);
                border = border.fg(theme.accent);
            } else if layer == LayerId::Alternate && rect.key.is_shift() {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }

            let key_widget = Paragraph::new(display_label(label))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(key_widget, rect.area);
        }
    }
}

/// Makes a label printable on its own.
///
/// N'Ko tone marks and the nasalization mark are combining characters;
/// alone they would stack onto the key border, so they get a dotted circle
/// base.
#[must_use]
pub fn display_label(label: &str) -> String {
    match label.chars().next() {
        Some(c) if is_nko_combining(c) => format!("\u{25CC}{label}"),
        _ => label.to_string(),
    }
}

fn is_nko_combining(c: char) -> bool {
    matches!(c, '\u{07EB}'..='\u{07F3}' | '\u{07FD}')
}
