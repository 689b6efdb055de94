//! Transcript rendering for the shell view.

use crate::shell::transcript::{LineStyle, Transcript};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn style_for(style: LineStyle, colors: &ThemeColors) -> Style {
    let base = Style::default().bg(colors.background);
    match style {
        LineStyle::Normal => base.fg(colors.foreground),
        LineStyle::Echo => base.fg(colors.echo),
        LineStyle::Error => base.fg(colors.error),
        LineStyle::Hint => base.fg(colors.hint),
        LineStyle::Header => base.fg(colors.header).add_modifier(Modifier::BOLD),
    }
}

/// Renders the newest lines of `transcript` that fit in `area`, oldest at
/// the top.
pub fn render_transcript(f: &mut Frame, area: Rect, transcript: &Transcript, colors: &ThemeColors) {
    let height = area.height as usize;
    let skip = transcript.len().saturating_sub(height);

    let lines: Vec<Line> = transcript
        .lines()
        .skip(skip)
        .map(|line| Line::from(Span::styled(line.text.clone(), style_for(line.style, colors))))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::transcript::OutputSink;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_shows_newest_lines() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("green").unwrap();
        let mut transcript = Transcript::new();
        for text in ["first", "second", "third"] {
            transcript.append_line(text, LineStyle::Normal);
        }

        terminal
            .draw(|f| render_transcript(f, f.area(), &transcript, &theme.colors))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!text.contains("first"));
        assert!(text.contains("second"));
        assert!(text.contains("third"));
    }
}
