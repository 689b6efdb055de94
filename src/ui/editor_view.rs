//! Editor view: header and buffer lines.

use super::prompt::{block_cursor_style, cursor_spans};
use crate::editor::mode::EditorMode;
use crate::editor::state::EditorSession;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the header: filename (or `New File`) and `[+]` when modified.
pub fn render_editor_header(
    f: &mut Frame,
    area: Rect,
    session: &EditorSession,
    colors: &ThemeColors,
) {
    let name = session.filename().unwrap_or("New File");
    let mut spans = vec![Span::styled(
        format!(" {}", name),
        Style::default()
            .fg(colors.header)
            .bg(colors.background)
            .add_modifier(Modifier::BOLD),
    )];
    if session.is_modified() {
        spans.push(Span::styled(
            " [+]",
            Style::default().fg(colors.warning).bg(colors.background),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}

/// First visible row so that the cursor row stays inside a window of `height`.
pub fn scroll_offset(cursor_row: usize, height: usize) -> usize {
    if height == 0 {
        return cursor_row;
    }
    cursor_row.saturating_sub(height - 1)
}

/// Renders the buffer lines. Rows past the end of the buffer show `~`.
///
/// The block cursor is hidden in CommandLine mode, where the cursor lives on
/// the command line instead.
pub fn render_buffer(f: &mut Frame, area: Rect, session: &EditorSession, colors: &ThemeColors) {
    let height = area.height as usize;
    let (cursor_row, cursor_col) = session.cursor().position();
    let offset = scroll_offset(cursor_row, height);
    let show_cursor = session.mode() != EditorMode::CommandLine;

    let text_style = Style::default().fg(colors.foreground).bg(colors.background);
    let filler_style = Style::default().fg(colors.dim).bg(colors.background);

    let lines: Vec<Line> = (offset..offset + height)
        .map(|row| match session.buffer().line(row) {
            Some(text) if show_cursor && row == cursor_row => Line::from(cursor_spans(
                text,
                cursor_col,
                text_style,
                block_cursor_style(colors),
            )),
            Some(text) => Line::from(Span::styled(text.to_string(), text_style)),
            None => Line::from(Span::styled("~", filler_style)),
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(3, 0), 3);
    }
}
