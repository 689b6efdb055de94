//! Editor mode management for modal editing.
//!
//! This module provides the `EditorMode` enum that represents the current editing
//! mode of the text editor. Following vim-style modal editing, the editor is always
//! in exactly one of three modes, each with its own key table.
//!
//! # Modes
//!
//! - **Normal**: The default mode for cursor navigation and entering other modes
//! - **Insert**: Mode for typing text into the buffer
//! - **CommandLine**: Mode for typing an ex-command such as `:w` or `:q`
//!
//! # Example
//!
//! ```
//! use termquill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode by default
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//!
//! // Switch to Insert mode
//! let mode = EditorMode::Insert;
//! assert_eq!(format!("{}", mode), "INSERT");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The behavior of a keystroke depends on the current mode. The mode is
/// displayed in the status bar using the `Display` implementation.
///
/// # Examples
///
/// ```
/// use termquill::editor::mode::EditorMode;
///
/// assert_eq!(format!("{}", EditorMode::Normal), "NORMAL");
/// assert_eq!(format!("{}", EditorMode::CommandLine), "COMMAND");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Navigation with `h`/`j`/`k`/`l`, `i` to insert, `:` for commands.
    #[default]
    Normal,
    /// Characters typed are spliced into the buffer.
    Insert,
    /// An ex-command is being typed after `:`.
    CommandLine,
}

impl EditorMode {
    /// Returns the status bar label, e.g. `-- INSERT --`.
    ///
    /// Command-line mode shows no label since the `:` prompt occupies the
    /// bottom line.
    pub fn status_label(&self) -> String {
        match self {
            EditorMode::CommandLine => String::new(),
            mode => format!("-- {} --", mode),
        }
    }
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string suitable for display in the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::CommandLine => write!(f, "COMMAND"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(EditorMode::Normal.status_label(), "-- NORMAL --");
        assert_eq!(EditorMode::Insert.status_label(), "-- INSERT --");
        assert_eq!(EditorMode::CommandLine.status_label(), "");
    }
}
