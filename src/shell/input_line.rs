//! Editable prompt line.

/// Text of the shell prompt and the caret inside it.
///
/// The caret is a character index in `[0, len]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    caret: usize,
}

fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in characters.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Text from the start of the line up to the caret.
    pub fn before_caret(&self) -> &str {
        &self.text[..byte_offset(&self.text, self.caret)]
    }

    /// Text from the caret to the end of the line.
    pub fn after_caret(&self) -> &str {
        &self.text[byte_offset(&self.text, self.caret)..]
    }

    /// Replaces the text and puts the caret at the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.len();
    }

    /// Replaces the text and puts the caret at `caret`, clamped to the length.
    pub fn set_with_caret(&mut self, text: impl Into<String>, caret: usize) {
        self.text = text.into();
        self.caret = caret.min(self.len());
    }

    /// Empties the line and returns what it held.
    pub fn take(&mut self) -> String {
        self.caret = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let offset = byte_offset(&self.text, self.caret);
        self.text.insert(offset, ch);
        self.caret += 1;
    }

    /// Deletes the character before the caret.
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let offset = byte_offset(&self.text, self.caret - 1);
        self.text.remove(offset);
        self.caret -= 1;
        true
    }

    /// Deletes the character under the caret.
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.len() {
            return false;
        }
        let offset = byte_offset(&self.text, self.caret);
        self.text.remove(offset);
        true
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.caret < self.len() {
            self.caret += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut line = InputLine::new();
        line.set("ac");
        line.move_left();
        line.insert('b');
        assert_eq!(line.text(), "abc");
        assert_eq!(line.caret(), 2);
        assert_eq!(line.before_caret(), "ab");
        assert_eq!(line.after_caret(), "c");
    }

    #[test]
    fn test_backspace_and_delete_bounds() {
        let mut line = InputLine::new();
        assert!(!line.backspace());
        assert!(!line.delete());

        line.set("xy");
        assert!(!line.delete());
        line.move_home();
        assert!(!line.backspace());
        assert!(line.delete());
        assert_eq!(line.text(), "y");
    }

    #[test]
    fn test_multibyte_caret() {
        let mut line = InputLine::new();
        line.set("héllo");
        line.move_home();
        line.move_right();
        line.move_right();
        assert_eq!(line.before_caret(), "hé");
        line.backspace();
        assert_eq!(line.text(), "hllo");
    }

    #[test]
    fn test_take_empties_line() {
        let mut line = InputLine::new();
        line.set("echo hi");
        assert_eq!(line.take(), "echo hi");
        assert!(line.is_empty());
        assert_eq!(line.caret(), 0);
    }
}
