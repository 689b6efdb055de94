//! Message area rendering for displaying messages and command input.

use super::prompt::render_prompt;
use crate::editor::mode::EditorMode;
use crate::editor::state::{EditorSession, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the editor.
///
/// Displays:
/// - CommandLine mode: `:` prompt with the command buffer
/// - Messages: errors, warnings, info
/// - Empty when no message
pub fn render_message_area(
    f: &mut Frame,
    area: Rect,
    session: &EditorSession,
    colors: &ThemeColors,
) {
    if session.mode() == EditorMode::CommandLine {
        let buffer = session.command_buffer();
        render_prompt(f, area, ":", buffer, buffer.chars().count(), colors);
        return;
    }

    let content = match session.message() {
        Some(message) => {
            let color = match message.level {
                MessageLevel::Error => colors.error,
                MessageLevel::Warning => colors.warning,
                MessageLevel::Info => colors.info,
            };
            Line::from(vec![Span::styled(
                message.text.as_str(),
                Style::default().fg(color),
            )])
        }
        None => Line::from(""),
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
