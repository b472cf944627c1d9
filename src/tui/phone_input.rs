//! Masked phone input widget.
//!
//! Renders the active mask as a row of single-digit cells separated by the
//! mask's literal runs, with a flag/prefix button that opens the country
//! picker. Keyboard input is translated into [`PhoneField`] operations; the
//! resulting change notifications are emitted as [`PhoneInputEvent`]s.
//!
//! Key map (dropdown closed): digits enter into the focused cell,
//! Tab/Right and Shift+Tab/Left move focus, Backspace deletes and moves
//! back, Enter forces a validation pass, Down opens the picker, Ctrl+V
//! imports the clipboard as an external value. With the dropdown open,
//! Up/Down navigate, Enter selects, Esc cancels.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::CountryMask;
use crate::parser::{parse_mask, MaskPart};
use crate::tui::component::Component;
use crate::tui::mask_picker::{render_mask_picker, MaskPickerState};
use crate::tui::phone_field::PhoneField;
use crate::tui::Theme;

/// Placeholder glyph shown in an empty digit cell.
const EMPTY_CELL: char = '_';

/// Events emitted by the phone input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneInputEvent {
    /// The formatted value changed (never repeats the previous value)
    Changed(String),
    /// Enter was pressed on a complete number
    Submitted(String),
    /// An external value was imported from the clipboard
    Imported(String),
    /// Clipboard import failed
    ImportFailed(String),
}

/// Phone input component state
#[derive(Debug)]
pub struct PhoneInput {
    field: PhoneField,
    picker: MaskPickerState,
}

impl PhoneInput {
    /// Creates a phone input over a non-empty mask list, importing an
    /// initial value (formatted, bare digits, or empty).
    ///
    /// # Errors
    ///
    /// Returns an error if `masks` is empty.
    pub fn new(masks: Vec<CountryMask>, value: &str) -> Result<Self> {
        Ok(Self {
            field: PhoneField::new(masks, value)?,
            picker: MaskPickerState::new(),
        })
    }

    /// Read access to the entry state (digits, active mask, validity).
    #[must_use]
    pub fn field(&self) -> &PhoneField {
        &self.field
    }

    /// Imports an externally supplied value, subject to the field's
    /// echo guard. Returns whether the value was imported.
    pub fn set_value(&mut self, value: &str) -> bool {
        self.field.set_value(value)
    }

    /// Reads the system clipboard and imports its text as an external value.
    fn paste_from_clipboard(&mut self) -> Option<PhoneInputEvent> {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => {
                let text = text.trim();
                if self.field.set_value(text) {
                    Some(PhoneInputEvent::Imported(self.field.formatted_value()))
                } else {
                    None
                }
            }
            Err(e) => Some(PhoneInputEvent::ImportFailed(format!(
                "Failed to read clipboard: {e}"
            ))),
        }
    }

    /// Handles a key while the picker dropdown is open.
    fn handle_picker_input(&mut self, key: KeyEvent) -> Option<PhoneInputEvent> {
        let mask_count = self.field.masks().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.picker.select_previous(mask_count);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.picker.select_next(mask_count);
                None
            }
            KeyCode::Enter => self
                .field
                .select_mask_at(self.picker.selected)
                .map(PhoneInputEvent::Changed),
            KeyCode::Esc => {
                self.field.close_dropdown();
                None
            }
            _ => None,
        }
    }

    /// Builds the cell row: flag button, literal runs, and digit cells.
    fn cell_line(&self, theme: &Theme) -> Line<'static> {
        let mask = self.field.current_mask();
        let parsed = parse_mask(&mask.pattern);

        let mut spans = vec![
            Span::styled(
                format!(" {} {} ▾ ", mask.emoji, mask.prefix),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];

        let mut cell_index = 0;
        for part in &parsed.parts {
            match part {
                MaskPart::Literal(text) => {
                    spans.push(Span::styled(
                        text.clone(),
                        Style::default().fg(theme.text_muted),
                    ));
                }
                MaskPart::Input => {
                    let digit = self.field.cell_digit(cell_index);
                    let focused =
                        cell_index == self.field.focused_cell() && !self.field.is_dropdown_open();

                    let mut style = match digit {
                        Some(_) => Style::default().fg(theme.text),
                        None => Style::default().fg(theme.text_muted),
                    };
                    if focused {
                        style = style
                            .fg(theme.accent)
                            .bg(theme.highlight_bg)
                            .add_modifier(Modifier::BOLD);
                    }

                    spans.push(Span::styled(
                        digit.unwrap_or(EMPTY_CELL).to_string(),
                        style,
                    ));
                    cell_index += 1;
                }
            }
        }

        Line::from(spans)
    }
}

impl Component for PhoneInput {
    type Event = PhoneInputEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if self.field.is_dropdown_open() {
            return self.handle_picker_input(key);
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('v'), KeyModifiers::CONTROL) => self.paste_from_clipboard(),

            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let cell = self.field.focused_cell();
                self.field.enter_digit(cell, c).map(PhoneInputEvent::Changed)
            }

            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Right, _) => {
                self.field.focus_next();
                None
            }

            (KeyCode::BackTab, _) | (KeyCode::Left, _) => {
                self.field.focus_prev();
                None
            }

            (KeyCode::Backspace, _) => {
                let cell = self.field.focused_cell();
                self.field.clear_cell(cell).map(PhoneInputEvent::Changed)
            }

            (KeyCode::Enter, _) => {
                // A complete number submits; the validation pass keeps the
                // notification dedup intact either way.
                self.field.validate();
                if self.field.is_complete() {
                    Some(PhoneInputEvent::Submitted(self.field.formatted_value()))
                } else {
                    None
                }
            }

            (KeyCode::Down, _) => {
                self.picker = MaskPickerState::open_at(self.field.current_mask_index());
                self.field.toggle_dropdown();
                None
            }

            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Phone Number ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));

        let cells = Paragraph::new(self.cell_line(theme))
            .block(block)
            .style(Style::default().bg(theme.background));
        f.render_widget(cells, area);

        if self.field.is_dropdown_open() {
            render_mask_picker(f, &self.picker, self.field.masks(), theme);
        }
    }
}
