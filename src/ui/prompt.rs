//! Single-line prompt with a block cursor.

use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Splits `text` around character column `cursor` and styles the character
/// under it with `cursor_style` (a space when the cursor is past the end).
pub fn cursor_spans(
    text: &str,
    cursor: usize,
    style: Style,
    cursor_style: Style,
) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let at = chars.get(cursor).copied().unwrap_or(' ');
    let after: String = chars.iter().skip(cursor + 1).collect();

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, style));
    }
    spans.push(Span::styled(at.to_string(), cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, style));
    }
    spans
}

/// Style of the character under a block cursor: inverted colors.
pub fn block_cursor_style(colors: &ThemeColors) -> Style {
    Style::default()
        .fg(colors.background)
        .bg(colors.cursor)
        .add_modifier(Modifier::BOLD)
}

/// Renders `prompt` followed by `buffer`, with a block cursor at `cursor_pos`.
pub fn render_prompt(
    f: &mut Frame,
    area: Rect,
    prompt: &str,
    buffer: &str,
    cursor_pos: usize,
    colors: &ThemeColors,
) {
    let text_style = Style::default().fg(colors.foreground).bg(colors.background);

    let mut spans = vec![Span::styled(
        prompt.to_string(),
        text_style.add_modifier(Modifier::BOLD),
    )];
    spans.extend(cursor_spans(
        buffer,
        cursor_pos,
        text_style,
        block_cursor_style(colors),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}
