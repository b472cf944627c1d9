//! Status bar showing the formatted value, completeness, and feedback
//! messages.
//!
//! Transient feedback (clipboard failures, submissions) is reported here
//! rather than through a logging framework: the terminal is the UI, so the
//! status line is the application's log.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::phone_field::PhoneField;
use crate::tui::Theme;

/// Kind of transient message currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Info,
    Error,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    message: Option<(String, MessageKind)>,
}

impl StatusBar {
    /// Creates an empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Shows an informational message until the next status change.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), MessageKind::Info));
    }

    /// Shows an error message until the next status change.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), MessageKind::Error));
    }

    /// Clears any transient message.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Whether a transient message is showing.
    #[must_use]
    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }

    /// Render the status bar.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, field: &PhoneField) {
        let entered = field.digits().chars().count();
        let total = field.input_count();

        let mut spans = vec![
            Span::styled("Value: ", Style::default().fg(theme.text_muted)),
            Span::styled(field.formatted_value(), Style::default().fg(theme.text)),
            Span::raw("  "),
        ];

        if field.is_complete() {
            spans.push(Span::styled(
                "✓ complete",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("{entered}/{total} digits"),
                Style::default().fg(theme.text_muted),
            ));
        }

        if let Some((message, kind)) = &self.message {
            let color = match kind {
                MessageKind::Info => theme.primary,
                MessageKind::Error => theme.error,
            };
            spans.push(Span::raw("  |  "));
            spans.push(Span::styled(message.clone(), Style::default().fg(color)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted)),
        );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_messages() {
        let mut bar = StatusBar::new();
        assert!(!bar.has_message());

        bar.set_status("Pasted");
        assert!(bar.has_message());

        bar.set_error("Clipboard unavailable");
        assert!(bar.has_message());

        bar.clear();
        assert!(!bar.has_message());
    }
}
