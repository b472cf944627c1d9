//! Country mask picker dropdown.
//!
//! Opened from the phone input's flag button, this popup lists the
//! configured candidate masks and lets the user activate one. Selection is
//! returned by index; the caller feeds it back into the entry state.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::CountryMask;
use crate::parser::parse_mask;

use super::Theme;

/// Mask picker state
#[derive(Debug, Clone, Default)]
pub struct MaskPickerState {
    /// Currently highlighted mask index
    pub selected: usize,
}

impl MaskPickerState {
    /// Creates a new mask picker state
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Opens the picker with the highlight on the active mask
    #[must_use]
    pub const fn open_at(index: usize) -> Self {
        Self { selected: index }
    }

    /// Move highlight up
    pub fn select_previous(&mut self, mask_count: usize) {
        if mask_count > 0 {
            if self.selected > 0 {
                self.selected -= 1;
            } else {
                self.selected = mask_count - 1;
            }
        }
    }

    /// Move highlight down
    pub fn select_next(&mut self, mask_count: usize) {
        if mask_count > 0 {
            self.selected = (self.selected + 1) % mask_count;
        }
    }
}

/// Render the mask picker popup
pub fn render_mask_picker(f: &mut Frame, state: &MaskPickerState, masks: &[CountryMask], theme: &Theme) {
    let area = centered_rect(50, 60, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    // Render opaque background with theme color
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Mask list
            Constraint::Length(3), // Help text
        ])
        .split(area);

    // Build list items: flag, name, prefix, and the pattern as a preview
    let list_items: Vec<ListItem> = masks
        .iter()
        .map(|mask| {
            let cells = parse_mask(&mask.pattern).input_count;
            let content = Line::from(vec![
                Span::styled(format!("{} ", mask.emoji), Style::default().fg(theme.text)),
                Span::styled(format!("{} ", mask.name), Style::default().fg(theme.text)),
                Span::styled(
                    format!("{} {}", mask.prefix, mask.pattern),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(
                    format!("  ({} digits)", cells),
                    Style::default().fg(theme.text_muted),
                ),
            ]);
            ListItem::new(content)
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(" Select Country ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(masks.len().saturating_sub(1))));

    f.render_stateful_widget(list, chunks[0], &mut list_state);

    // Help text
    let help = Paragraph::new("^|v: Navigate | Enter: Select | Esc: Cancel")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        )
        .style(Style::default().fg(theme.text_muted));
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
