//! Output transcript of the shell.
//!
//! Everything the shell prints goes through the [`OutputSink`] trait. The
//! [`Transcript`] implementation keeps the lines in memory for the UI to draw,
//! dropping the oldest ones once the scrollback limit is reached.

use std::collections::VecDeque;

/// Presentation hint for a transcript line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Normal,
    /// Echo of a submitted input line.
    Echo,
    Error,
    Hint,
    /// Section heading in command output.
    Header,
}

/// One line of shell output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub style: LineStyle,
}

/// Destination for shell output.
pub trait OutputSink {
    /// Appends `text` with `style`. Text containing newlines becomes several
    /// lines with the same style.
    fn append_line(&mut self, text: &str, style: LineStyle);

    /// Removes all output.
    fn clear(&mut self);
}

/// Default number of lines kept by a [`Transcript`].
pub const DEFAULT_SCROLLBACK: usize = 1000;

/// In-memory [`OutputSink`] with bounded scrollback.
///
/// # Example
///
/// ```
/// use termquill::shell::transcript::{LineStyle, OutputSink, Transcript};
///
/// let mut transcript = Transcript::with_limit(2);
/// transcript.append_line("one", LineStyle::Normal);
/// transcript.append_line("two\nthree", LineStyle::Hint);
///
/// let texts: Vec<_> = transcript.lines().map(|l| l.text.as_str()).collect();
/// assert_eq!(texts, vec!["two", "three"]);
/// ```
#[derive(Debug, Clone)]
pub struct Transcript {
    lines: VecDeque<TranscriptLine>,
    limit: usize,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_limit(DEFAULT_SCROLLBACK)
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transcript keeping at most `limit` lines (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Changes the scrollback limit, dropping old lines if needed.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.trim();
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &TranscriptLine> + ExactSizeIterator {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the plain text of every line, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.text.clone()).collect()
    }

    /// Returns true if any line equals `text` exactly.
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|line| line.text == text)
    }

    fn trim(&mut self) {
        while self.lines.len() > self.limit {
            self.lines.pop_front();
        }
    }
}

impl OutputSink for Transcript {
    fn append_line(&mut self, text: &str, style: LineStyle) {
        for part in text.split('\n') {
            self.lines.push_back(TranscriptLine {
                text: part.to_string(),
                style,
            });
        }
        self.trim();
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_style() {
        let mut transcript = Transcript::new();
        transcript.append_line("> ls", LineStyle::Echo);
        let line = transcript.lines().next().unwrap();
        assert_eq!(line.text, "> ls");
        assert_eq!(line.style, LineStyle::Echo);
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        let mut transcript = Transcript::new();
        transcript.append_line("", LineStyle::Normal);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_set_limit_drops_oldest() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.append_line(&i.to_string(), LineStyle::Normal);
        }
        transcript.set_limit(2);
        assert_eq!(transcript.texts(), vec!["3", "4"]);
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::new();
        transcript.append_line("x", LineStyle::Normal);
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
