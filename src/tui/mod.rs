//! Terminal user interface for the phone entry widget.
//!
//! This module contains terminal setup/teardown, the `App` state, the
//! synchronous event loop, and the UI widgets using Ratatui.

pub mod component;
pub mod mask_picker;
pub mod phone_field;
pub mod phone_input;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;

// Re-export TUI components
pub use component::Component;
pub use mask_picker::MaskPickerState;
pub use phone_field::PhoneField;
pub use phone_input::{PhoneInput, PhoneInputEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Terminal handle used by the event loop.
pub type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Puts the terminal into raw mode on the alternate screen.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Top-level application state.
pub struct App {
    phone: PhoneInput,
    status: StatusBar,
    theme: Theme,
    /// Last value emitted by the widget (printed on exit)
    value: String,
    should_quit: bool,
}

impl App {
    /// Builds the app from configuration and an optional initial value.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured mask list is empty.
    pub fn new(config: &Config, value: &str) -> Result<Self> {
        let phone = PhoneInput::new(config.masks.clone(), value)?;
        let value = phone.field().formatted_value();
        Ok(Self {
            phone,
            status: StatusBar::new(),
            theme: Theme::from_mode(config.ui.theme_mode),
            value,
            should_quit: false,
        })
    }

    /// The last formatted value the widget reported.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the main loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatches one key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit bindings; 'q' never collides with digit entry and
        // Esc only quits when the dropdown is not consuming it.
        let dropdown_open = self.phone.field().is_dropdown_open();
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) if !dropdown_open => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.phone.handle_input(key) {
            Some(PhoneInputEvent::Changed(value)) => {
                self.value = value;
                self.status.clear();
            }
            Some(PhoneInputEvent::Submitted(value)) => {
                self.status.set_status(format!("Submitted {value}"));
                self.value = value;
            }
            Some(PhoneInputEvent::Imported(value)) => {
                self.status.set_status("Clipboard value imported");
                self.value = value;
            }
            Some(PhoneInputEvent::ImportFailed(message)) => {
                self.status.set_error(message);
            }
            None => {}
        }
    }

    /// Renders one frame.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Phone input
                Constraint::Length(3), // Status bar
                Constraint::Min(0),    // Help
            ])
            .split(f.area());

        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {} ", APP_NAME),
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        self.phone.render(f, chunks[1], &self.theme);
        self.status
            .render(f, chunks[2], &self.theme, self.phone.field());

        render_help(f, chunks[3], &self.theme);
    }
}

fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let help = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            " 0-9 enter digit | Tab/arrows move | Backspace delete | Down country | Ctrl+V paste",
            Style::default().fg(theme.text_muted),
        )),
        Line::from(Span::styled(
            " Enter submit | q/Esc quit",
            Style::default().fg(theme.text_muted),
        )),
    ]);
    f.render_widget(help, area);
}

/// Runs the main event loop until the user quits.
///
/// All input is handled synchronously, one event at a time; the only
/// waiting is the input poll between frames.
pub fn run_tui(app: &mut App, terminal: &mut Tui) -> Result<()> {
    loop {
        terminal
            .draw(|f| app.render(f))
            .context("Failed to draw frame")?;

        if event::poll(Duration::from_millis(100)).context("Failed to poll events")? {
            match event::read().context("Failed to read event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
