//! Cursor position tracking for the line buffer.
//!
//! The cursor is a `(row, col)` pair into a [`LineBuffer`](super::buffer::LineBuffer).
//! Columns count characters, not bytes, so a cursor is always on a character
//! boundary regardless of the text it points into.
//!
//! The cursor itself knows nothing about the buffer; clamping against line
//! lengths is done by the editor state, which owns both.
//!
//! # Example
//!
//! ```
//! use termquill::editor::cursor::Cursor;
//!
//! let mut cursor = Cursor::new();
//! assert_eq!(cursor.position(), (0, 0));
//!
//! cursor.set(2, 5);
//! assert_eq!(cursor.row(), 2);
//! assert_eq!(cursor.col(), 5);
//! ```

/// Position of the editing cursor as a row and a character column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    /// Creates a cursor at the start of the buffer.
    pub fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Returns the zero-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the zero-based character column.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns `(row, col)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Moves the cursor to `(row, col)` without any bounds checks.
    pub fn set(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    pub fn set_row(&mut self, row: usize) {
        self.row = row;
    }

    pub fn set_col(&mut self, col: usize) {
        self.col = col;
    }

    /// Clamps the column to at most `max_col`.
    ///
    /// # Examples
    ///
    /// ```
    /// use termquill::editor::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new();
    /// cursor.set(0, 10);
    /// cursor.clamp_col(4);
    /// assert_eq!(cursor.col(), 4);
    /// ```
    pub fn clamp_col(&mut self, max_col: usize) {
        self.col = self.col.min(max_col);
    }
}
