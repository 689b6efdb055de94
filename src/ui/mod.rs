//! UI module for the termquill terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal
//! interface, including layout management and widget composition.

pub mod editor_view;
pub mod message_area;
pub mod prompt;
pub mod status_line;
pub mod transcript_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::shell::Shell;
use crate::theme::Theme;

/// Prompt shown in front of the shell input line.
pub const PROMPT: &str = "> ";

/// Main UI structure that manages the terminal interface rendering.
///
/// Two views share the screen, one at a time:
/// - Shell view: transcript (top) and the prompt line (bottom)
/// - Editor view: header, buffer lines, status line, and message area
///
/// # Example
///
/// ```no_run
/// use termquill::shell::Shell;
/// use termquill::storage::MemoryStorage;
/// use termquill::theme::get_builtin_theme;
/// use termquill::ui::UI;
/// use ratatui::backend::TermionBackend;
/// use ratatui::Terminal;
/// use std::io;
/// use termion::raw::IntoRawMode;
///
/// let ui = UI::new(get_builtin_theme("green").unwrap());
/// let shell = Shell::new(Box::new(MemoryStorage::new()));
/// let backend = TermionBackend::new(io::stdout().into_raw_mode().unwrap());
/// let mut terminal = Terminal::new(backend).unwrap();
/// ui.render(&mut terminal, &shell).unwrap();
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use termquill::ui::UI;
    /// use termquill::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("amber").unwrap();
    /// let ui = UI::new(theme);
    /// assert_eq!(ui.theme_name(), "amber");
    /// ```
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Changes the current theme.
    ///
    /// Returns true if the theme was successfully changed, false if the theme name is invalid.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        use crate::theme::get_builtin_theme;

        if let Some(new_theme) = get_builtin_theme(theme_name) {
            self.theme = new_theme;
            true
        } else {
            false
        }
    }

    /// Renders the whole screen for `shell`.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>, shell: &Shell) -> Result<()> {
        let colors = &self.theme.colors;

        terminal.draw(|f| {
            if let Some(session) = shell.editor().session() {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1), // Header
                        Constraint::Min(1),    // Buffer
                        Constraint::Length(1), // Status line
                        Constraint::Length(1), // Message area
                    ])
                    .split(f.area());

                editor_view::render_editor_header(f, chunks[0], session, colors);
                editor_view::render_buffer(f, chunks[1], session, colors);
                status_line::render_status_line(f, chunks[2], session, colors);
                message_area::render_message_area(f, chunks[3], session, colors);
            } else {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(1),    // Transcript
                        Constraint::Length(1), // Prompt
                    ])
                    .split(f.area());

                transcript_view::render_transcript(f, chunks[0], shell.transcript(), colors);
                let input = shell.input();
                prompt::render_prompt(f, chunks[1], PROMPT, input.text(), input.caret(), colors);
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_set_theme_rejects_unknown() {
        let mut ui = UI::new(get_builtin_theme("green").unwrap());
        assert!(!ui.set_theme("nonexistent"));
        assert!(ui.set_theme("nord"));
        assert_eq!(ui.theme_name(), "nord");
    }

    #[test]
    fn test_render_shell_view() {
        let ui = UI::new(get_builtin_theme("green").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let mut shell = Shell::new(Box::new(MemoryStorage::new()));
        shell.print("hello there");
        shell.input_mut().set("ls -l");

        ui.render(&mut terminal, &shell).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("hello there"));
        assert!(text.contains("> ls -l"));
    }

    #[test]
    fn test_render_editor_view() {
        let ui = UI::new(get_builtin_theme("green").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        let mut shell = Shell::new(Box::new(MemoryStorage::new()));
        shell.print("hidden while editing");
        shell.open_editor(None);

        ui.render(&mut terminal, &shell).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("New File"));
        assert!(text.contains("-- NORMAL --"));
        assert!(text.contains("~"));
        assert!(!text.contains("hidden while editing"));
    }
}
