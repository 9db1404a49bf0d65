//! Text display widget showing the typed buffer.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Height of the display area, borders included.
pub const DISPLAY_HEIGHT: u16 = 7;

/// Display widget
pub struct DisplayWidget;

impl DisplayWidget {
    /// Render the text the host was last given.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let screen = state.screen();

        let alignment = if state.config.ui.right_to_left {
            Alignment::Right
        } else {
            Alignment::Left
        };
        let border = if screen.display_focused() {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };

        let width = area.width.saturating_sub(2);
        let lines = wrapped_lines(screen.display_text(), width);

        // Keep the last rows visible once the text outgrows the area
        let visible = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);

        let text = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
            .alignment(alignment)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .title(" Text ")
                    .borders(Borders::ALL)
                    .border_style(border),
            );

        f.render_widget(text, area);
    }
}

/// Wraps each line of `text` to `width` columns; a blank line keeps its row.
fn wrapped_lines(text: &str, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    text.split('\n')
        .flat_map(|line| textwrap::wrap(line, width))
        .map(|row| Line::from(row.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{LayoutTable, PhysicalKey};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn typed_state(keys: &[PhysicalKey]) -> AppState {
        let mut config = Config::new();
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        let mut state = AppState::new(Arc::new(LayoutTable::nko().unwrap()), config);
        for &key in keys {
            state.activate(key);
        }
        state
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| DisplayWidget::render(f, f.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_wrapped_lines_counts_rows() {
        assert_eq!(wrapped_lines("", 10).len(), 1);
        assert_eq!(wrapped_lines("a\n\nb", 10).len(), 3);
        assert_eq!(wrapped_lines(&"\u{07CA}".repeat(25), 10).len(), 3);
    }

    #[test]
    fn test_long_single_line_shows_latest_glyph() {
        let mut keys = vec![PhysicalKey::KeyA; 200];
        keys.push(PhysicalKey::KeyQ);
        let state = typed_state(&keys);
        assert!(!state.screen().display_text().contains('\n'));

        let content = draw(&state, 30, DISPLAY_HEIGHT);
        assert!(content.contains('\u{07D2}'));
    }

    #[test]
    fn test_many_lines_show_the_last_one() {
        let mut keys = Vec::new();
        for _ in 0..10 {
            keys.extend([PhysicalKey::KeyA, PhysicalKey::Enter]);
        }
        keys.push(PhysicalKey::KeyQ);
        let state = typed_state(&keys);

        let content = draw(&state, 30, DISPLAY_HEIGHT);
        assert!(content.contains('\u{07D2}'));
    }
}
