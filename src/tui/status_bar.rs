//! Status bar widget for displaying status messages and hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::models::LayerId;
use crate::shortcuts::ShortcutContext;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message line, then shortcut hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            ))
        } else {
            Self::summary_line(state, theme)
        };

        let status = Paragraph::new(vec![message_line, Self::hints_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Layer badge plus character count
    fn summary_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let layer = state.controller.active_layer();
        let badge_style = match layer {
            LayerId::Primary => Style::default().fg(theme.primary),
            LayerId::Alternate => Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        };
        let chars = state.controller.buffer().chars().count();

        Line::from(vec![
            Span::styled("Layer: ", Style::default().fg(theme.text_muted)),
            Span::styled(layer.to_string(), badge_style),
            Span::styled("  Characters: ", Style::default().fg(theme.text_muted)),
            Span::raw(chars.to_string()),
        ])
    }

    /// Shortcut hints from the registry
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (binding, action)) in state
            .shortcuts
            .bindings_for(ShortcutContext::Main)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(binding.label(), Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                action.description(),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
