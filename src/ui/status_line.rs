//! Status line widget for the editor.
//!
//! The status line shows:
//! - Current mode label (`-- NORMAL --`, `-- INSERT --`, empty on the command line)
//! - Cursor position as 1-based `row,col`
//!
//! Example status line: `-- INSERT --                              3,7`

use crate::editor::state::EditorSession;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line for `session`.
pub fn render_status_line(
    f: &mut Frame,
    area: Rect,
    session: &EditorSession,
    colors: &ThemeColors,
) {
    let mode_text = format!(" {}", session.mode().status_label());
    let (row, col) = session.cursor().position();
    let position = format!("{},{} ", row + 1, col + 1);

    // Right-align the position
    let total_width = area.width as usize;
    let left_len = mode_text.chars().count();
    let position_len = position.chars().count();
    let padding = if left_len + position_len < total_width {
        total_width - left_len - position_len
    } else {
        1
    };

    let style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);

    let line = Line::from(vec![
        Span::styled(mode_text, style),
        Span::styled(" ".repeat(padding), style),
        Span::styled(position, style),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
