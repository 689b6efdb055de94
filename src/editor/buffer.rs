//! Line buffer model for the text editor.
//!
//! A [`LineBuffer`] is an ordered list of lines that is never empty: an empty
//! document is a single empty line. Lines never contain a line terminator;
//! splitting and joining lines is how newlines are edited.
//!
//! All columns are character indices. Mutations take the position they act on
//! and return whether the buffer changed, leaving cursor bookkeeping to the
//! caller.
//!
//! # Example
//!
//! ```
//! use termquill::editor::buffer::LineBuffer;
//!
//! let mut buffer = LineBuffer::from_text("hello\nworld");
//! assert_eq!(buffer.line_count(), 2);
//!
//! buffer.split_line(0, 2);
//! assert_eq!(buffer.lines(), &["he", "llo", "world"]);
//! assert_eq!(buffer.to_text(), "he\nllo\nworld");
//! ```

/// Ordered, never-empty sequence of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

/// Converts a character column into a byte offset within `line`.
///
/// Columns past the end map to `line.len()`.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Builds a buffer by splitting `text` on `\n`.
    ///
    /// A trailing `\r` on any line is dropped so that no line carries a
    /// terminator. `""` yields `[""]` and `"a\n"` yields `["a", ""]`, which
    /// makes [`to_text`](Self::to_text) the exact inverse for `\n` text.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    /// Joins all lines with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the line at `row`, if any.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Returns the length of `row` in characters, or 0 if the row does not exist.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines
            .get(row)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Inserts `ch` before character column `col` of `row`.
    ///
    /// Returns false if the position is outside the buffer.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        if col > self.line_len(row) {
            return false;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let offset = byte_offset(line, col);
        line.insert(offset, ch);
        true
    }

    /// Splits `row` at `col`; the text after the split becomes a new row below.
    pub fn split_line(&mut self, row: usize, col: usize) -> bool {
        if col > self.line_len(row) {
            return false;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let offset = byte_offset(line, col);
        let rest = line.split_off(offset);
        self.lines.insert(row + 1, rest);
        true
    }

    /// Removes the character just before column `col` of `row`.
    ///
    /// Returns false when `col` is 0 or out of range.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> bool {
        if col == 0 || col > self.line_len(row) {
            return false;
        }
        let Some(line) = self.lines.get_mut(row) else {
            return false;
        };
        let offset = byte_offset(line, col - 1);
        line.remove(offset);
        true
    }

    /// Appends `row` onto the end of the previous row and removes `row`.
    ///
    /// Returns the column of the join point in the merged line, or `None` if
    /// `row` is 0 or does not exist.
    pub fn join_with_previous(&mut self, row: usize) -> Option<usize> {
        if row == 0 || row >= self.lines.len() {
            return None;
        }
        let join_col = self.line_len(row - 1);
        let current = self.lines.remove(row);
        self.lines[row - 1].push_str(&current);
        Some(join_col)
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_one_empty_line() {
        let buffer = LineBuffer::new();
        assert_eq!(buffer.lines(), &[""]);
        assert_eq!(buffer.to_text(), "");
    }

    #[test]
    fn test_from_text_keeps_trailing_empty_line() {
        let buffer = LineBuffer::from_text("a\n");
        assert_eq!(buffer.lines(), &["a", ""]);
        assert_eq!(buffer.to_text(), "a\n");
    }

    #[test]
    fn test_from_text_strips_carriage_returns() {
        let buffer = LineBuffer::from_text("one\r\ntwo\r\n");
        assert_eq!(buffer.lines(), &["one", "two", ""]);
    }

    #[test]
    fn test_insert_char_uses_character_columns() {
        let mut buffer = LineBuffer::from_text("héllo");
        assert!(buffer.insert_char(0, 2, 'X'));
        assert_eq!(buffer.line(0), Some("héXllo"));
        assert_eq!(buffer.line_len(0), 6);
    }

    #[test]
    fn test_insert_char_out_of_range() {
        let mut buffer = LineBuffer::from_text("ab");
        assert!(!buffer.insert_char(0, 3, 'x'));
        assert!(!buffer.insert_char(1, 0, 'x'));
        assert_eq!(buffer.lines(), &["ab"]);
    }

    #[test]
    fn test_split_at_end_creates_empty_line() {
        let mut buffer = LineBuffer::from_text("abc");
        assert!(buffer.split_line(0, 3));
        assert_eq!(buffer.lines(), &["abc", ""]);
    }

    #[test]
    fn test_delete_char_before() {
        let mut buffer = LineBuffer::from_text("abc");
        assert!(!buffer.delete_char_before(0, 0));
        assert!(buffer.delete_char_before(0, 2));
        assert_eq!(buffer.line(0), Some("ac"));
    }

    #[test]
    fn test_join_with_previous() {
        let mut buffer = LineBuffer::from_text("abc\ndef");
        assert_eq!(buffer.join_with_previous(0), None);
        assert_eq!(buffer.join_with_previous(1), Some(3));
        assert_eq!(buffer.lines(), &["abcdef"]);
    }

    #[test]
    fn test_split_then_join_restores_line() {
        let mut buffer = LineBuffer::from_text("abcdef");
        buffer.split_line(0, 3);
        assert_eq!(buffer.join_with_previous(1), Some(3));
        assert_eq!(buffer.lines(), &["abcdef"]);
    }
}
