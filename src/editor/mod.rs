//! Modal text editor.
//!
//! This module provides the editor hosted by the shell's `edit` command. It
//! follows vim-style modal editing with Normal, Insert, and CommandLine modes
//! over a simple buffer of lines.
//!
//! # Modules
//!
//! - `buffer`: Line buffer model with bounds-safe mutations
//! - `cursor`: Cursor position within the buffer
//! - `ex`: Parser for the `:w`, `:q`, `:wq`, `:q!` command language
//! - `mode`: Editor mode enumeration
//! - `state`: Editor session and mode state machine
//!
//! # Example
//!
//! ```
//! use termquill::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod buffer;
pub mod cursor;
pub mod ex;
pub mod mode;
pub mod state;

pub use state::{Editor, EditorOutcome, EditorSession, Message, MessageLevel};
