//! Editor state management.
//!
//! This module provides [`EditorSession`], the runtime state of one open editor
//! (buffer, cursor, mode, filename, modified flag, command line and status
//! message), and [`Editor`], the component that owns at most one session at a
//! time and is reused across `edit` invocations.
//!
//! Every keystroke is applied to completion through
//! [`EditorSession::handle_event`] before the next one is read, so no edit can
//! be observed half applied.
//!
//! # Example
//!
//! ```
//! use termquill::editor::mode::EditorMode;
//! use termquill::editor::state::{Editor, EditorOutcome};
//! use termquill::input::keys::EditorEvent;
//! use termquill::storage::{FileStorage, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! let mut editor = Editor::new();
//! editor.open(Some("hello.txt"), &storage);
//!
//! for event in [
//!     EditorEvent::EnterInsertMode,
//!     EditorEvent::InsertCharacter('h'),
//!     EditorEvent::InsertCharacter('i'),
//!     EditorEvent::ExitMode,
//! ] {
//!     editor.handle_event(&event, &mut storage);
//! }
//! assert_eq!(editor.session().unwrap().mode(), EditorMode::Normal);
//!
//! editor.handle_event(&EditorEvent::EnterCommandMode, &mut storage);
//! for c in "wq".chars() {
//!     editor.handle_event(&EditorEvent::CommandCharacter(c), &mut storage);
//! }
//! let outcome = editor.handle_event(&EditorEvent::ExecuteCommand, &mut storage);
//!
//! assert_eq!(outcome, EditorOutcome::Closed);
//! assert!(!editor.is_active());
//! assert_eq!(storage.load("hello.txt").unwrap().as_deref(), Some("hi"));
//! ```

use super::buffer::LineBuffer;
use super::cursor::Cursor;
use super::ex::ExCommand;
use super::mode::EditorMode;
use crate::input::keys::EditorEvent;
use crate::storage::FileStorage;

/// Represents a message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Result of feeding one event to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The session is still open.
    Continue,
    /// The session ended; input goes back to the shell.
    Closed,
}

/// State of one open editor, from `open` until it is closed.
#[derive(Debug, Clone)]
pub struct EditorSession {
    buffer: LineBuffer,
    cursor: Cursor,
    mode: EditorMode,
    filename: Option<String>,
    modified: bool,
    command_buffer: String,
    message: Option<Message>,
}

impl EditorSession {
    /// Creates a session in Normal mode with the cursor at the start of `buffer`.
    pub fn new(buffer: LineBuffer, filename: Option<String>) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            mode: EditorMode::Normal,
            filename,
            modified: false,
            command_buffer: String::new(),
            message: None,
        }
    }

    /// Creates a session for `filename`, loading its content from `storage`
    /// when it exists. A missing file starts an empty buffer that will be
    /// saved under that name.
    pub fn open(filename: Option<&str>, storage: &dyn FileStorage) -> Self {
        let filename = filename.filter(|name| !name.is_empty());
        let Some(name) = filename else {
            return Self::new(LineBuffer::new(), None);
        };

        match storage.load(name) {
            Ok(Some(content)) => Self::new(LineBuffer::from_text(&content), Some(name.to_string())),
            Ok(None) => Self::new(LineBuffer::new(), Some(name.to_string())),
            Err(e) => {
                tracing::error!(file = name, error = %e, "failed to load file into editor");
                let mut session = Self::new(LineBuffer::new(), Some(name.to_string()));
                session.set_message(format!("Error loading file: {}", e), MessageLevel::Error);
                session
            }
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns true if the buffer has changed since it was opened or last saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Returns the text typed after `:` in command-line mode.
    pub fn command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// Returns the current message, if any.
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Sets a message to display to the user.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    /// Clears the current message.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Applies one event according to the current mode's transition table.
    ///
    /// Events that have no meaning in the current mode are ignored.
    pub fn handle_event(
        &mut self,
        event: &EditorEvent,
        storage: &mut dyn FileStorage,
    ) -> EditorOutcome {
        match self.mode {
            EditorMode::Normal => {
                self.handle_normal(event);
                EditorOutcome::Continue
            }
            EditorMode::Insert => {
                self.handle_insert(event);
                EditorOutcome::Continue
            }
            EditorMode::CommandLine => self.handle_command_line(event, storage),
        }
    }

    fn handle_normal(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::MoveLeft => self.move_left(),
            EditorEvent::MoveRight => self.move_right(),
            EditorEvent::MoveUp => self.move_up(),
            EditorEvent::MoveDown => self.move_down(),
            EditorEvent::EnterInsertMode => self.mode = EditorMode::Insert,
            EditorEvent::EnterCommandMode => self.enter_command_mode(),
            _ => {}
        }
    }

    fn handle_insert(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::ExitMode => self.exit_insert_mode(),
            EditorEvent::InsertCharacter(c) => self.insert_char(*c),
            EditorEvent::InsertEnter => self.insert_newline(),
            EditorEvent::InsertBackspace => self.backspace(),
            _ => {}
        }
    }

    fn handle_command_line(
        &mut self,
        event: &EditorEvent,
        storage: &mut dyn FileStorage,
    ) -> EditorOutcome {
        match event {
            EditorEvent::CommandCharacter(c) => self.command_buffer.push(*c),
            EditorEvent::CommandBackspace => {
                self.command_buffer.pop();
            }
            EditorEvent::ExitMode => self.exit_command_mode(),
            EditorEvent::ExecuteCommand => return self.execute_command(storage),
            _ => {}
        }
        EditorOutcome::Continue
    }

    /// Largest column the cursor may rest on in Normal mode for `row`.
    fn normal_max_col(&self, row: usize) -> usize {
        self.buffer.line_len(row).saturating_sub(1)
    }

    fn move_left(&mut self) {
        let col = self.cursor.col();
        if col > 0 {
            self.cursor.set_col(col - 1);
        }
    }

    fn move_right(&mut self) {
        let col = self.cursor.col();
        if col + 1 < self.buffer.line_len(self.cursor.row()) {
            self.cursor.set_col(col + 1);
        }
    }

    fn move_up(&mut self) {
        let row = self.cursor.row();
        if row > 0 {
            self.cursor.set_row(row - 1);
            self.cursor.clamp_col(self.normal_max_col(row - 1));
        }
    }

    fn move_down(&mut self) {
        let row = self.cursor.row();
        if row + 1 < self.buffer.line_count() {
            self.cursor.set_row(row + 1);
            self.cursor.clamp_col(self.normal_max_col(row + 1));
        }
    }

    fn exit_insert_mode(&mut self) {
        self.mode = EditorMode::Normal;
        let col = self.cursor.col();
        if col > 0 {
            self.cursor.set_col(col - 1);
        }
    }

    fn insert_char(&mut self, ch: char) {
        self.modified = true;
        let (row, col) = self.cursor.position();
        if self.buffer.insert_char(row, col, ch) {
            self.cursor.set_col(col + 1);
        }
    }

    fn insert_newline(&mut self) {
        self.modified = true;
        let (row, col) = self.cursor.position();
        if self.buffer.split_line(row, col) {
            self.cursor.set(row + 1, 0);
        }
    }

    fn backspace(&mut self) {
        self.modified = true;
        let (row, col) = self.cursor.position();
        if col > 0 {
            if self.buffer.delete_char_before(row, col) {
                self.cursor.set_col(col - 1);
            }
        } else if let Some(join_col) = self.buffer.join_with_previous(row) {
            self.cursor.set(row - 1, join_col);
        }
    }

    fn enter_command_mode(&mut self) {
        self.mode = EditorMode::CommandLine;
        self.command_buffer.clear();
        self.clear_message();
    }

    fn exit_command_mode(&mut self) {
        self.mode = EditorMode::Normal;
        self.command_buffer.clear();
    }

    /// Runs the text on the command line and leaves command-line mode.
    fn execute_command(&mut self, storage: &mut dyn FileStorage) -> EditorOutcome {
        let line = std::mem::take(&mut self.command_buffer);
        self.exit_command_mode();

        let command = match ExCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => return EditorOutcome::Continue,
            Err(e) => {
                self.set_message(e.to_string(), MessageLevel::Error);
                return EditorOutcome::Continue;
            }
        };

        match command {
            ExCommand::Write(name) => {
                self.save(name.as_deref(), storage);
                EditorOutcome::Continue
            }
            ExCommand::Quit => {
                if self.modified {
                    self.set_message(
                        "No write since last change (use :q! to override)".to_string(),
                        MessageLevel::Warning,
                    );
                    return EditorOutcome::Continue;
                }
                EditorOutcome::Closed
            }
            ExCommand::ForceQuit => EditorOutcome::Closed,
            ExCommand::WriteQuit(name) => {
                if self.save(name.as_deref(), storage) {
                    EditorOutcome::Closed
                } else {
                    EditorOutcome::Continue
                }
            }
        }
    }

    /// Writes the buffer to `name`, or to the session's filename.
    ///
    /// Returns true on success. On failure the modified flag is left alone so
    /// the unsaved state stays visible.
    pub fn save(&mut self, name: Option<&str>, storage: &mut dyn FileStorage) -> bool {
        let Some(target) = name.or(self.filename.as_deref()).map(|s| s.to_string()) else {
            self.set_message(
                "No file name. Use :w filename".to_string(),
                MessageLevel::Error,
            );
            return false;
        };

        let content = self.buffer.to_text();
        match storage.save(&target, &content) {
            Ok(()) => {
                let chars = content.chars().count();
                tracing::info!(file = %target, chars, "buffer written");
                self.filename = Some(target.clone());
                self.modified = false;
                self.set_message(
                    format!("\"{}\" written, {} characters", target, chars),
                    MessageLevel::Info,
                );
                true
            }
            Err(e) => {
                tracing::error!(file = %target, error = %e, "failed to write buffer");
                self.set_message(format!("Error saving file: {}", e), MessageLevel::Error);
                false
            }
        }
    }
}

/// The editor component: holds the active session, if any.
///
/// Opening always starts a fresh session; an already open session is replaced.
#[derive(Debug, Default)]
pub struct Editor {
    session: Option<EditorSession>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a session is open.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditorSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditorSession> {
        self.session.as_mut()
    }

    /// Starts a new session on `filename`.
    pub fn open(&mut self, filename: Option<&str>, storage: &dyn FileStorage) {
        let session = EditorSession::open(filename, storage);
        tracing::info!(
            file = session.filename().unwrap_or("<new>"),
            lines = session.buffer().line_count(),
            "editor opened"
        );
        self.session = Some(session);
    }

    /// Ends the current session, discarding its state.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                file = session.filename().unwrap_or("<new>"),
                discarded_changes = session.is_modified(),
                "editor closed"
            );
        }
    }

    /// Feeds one event to the open session. Does nothing when inactive.
    pub fn handle_event(
        &mut self,
        event: &EditorEvent,
        storage: &mut dyn FileStorage,
    ) -> EditorOutcome {
        let Some(session) = self.session.as_mut() else {
            return EditorOutcome::Closed;
        };
        let outcome = session.handle_event(event, storage);
        if outcome == EditorOutcome::Closed {
            self.close();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session_with(text: &str) -> EditorSession {
        EditorSession::new(LineBuffer::from_text(text), None)
    }

    fn feed(session: &mut EditorSession, events: &[EditorEvent]) -> EditorOutcome {
        let mut storage = MemoryStorage::new();
        let mut outcome = EditorOutcome::Continue;
        for event in events {
            outcome = session.handle_event(event, &mut storage);
        }
        outcome
    }

    #[test]
    fn test_move_right_stops_on_last_character() {
        let mut session = session_with("abc");
        feed(
            &mut session,
            &[
                EditorEvent::MoveRight,
                EditorEvent::MoveRight,
                EditorEvent::MoveRight,
            ],
        );
        assert_eq!(session.cursor().col(), 2);
    }

    #[test]
    fn test_move_down_reclamps_column() {
        let mut session = session_with("abcdef\nxy");
        session.cursor.set(0, 5);
        feed(&mut session, &[EditorEvent::MoveDown]);
        assert_eq!(session.cursor().position(), (1, 1));
    }

    #[test]
    fn test_move_down_onto_empty_line() {
        let mut session = session_with("abc\n");
        session.cursor.set(0, 2);
        feed(&mut session, &[EditorEvent::MoveDown]);
        assert_eq!(session.cursor().position(), (1, 0));
    }

    #[test]
    fn test_vertical_moves_clamp_at_edges() {
        let mut session = session_with("one\ntwo");
        feed(&mut session, &[EditorEvent::MoveUp]);
        assert_eq!(session.cursor().row(), 0);
        feed(&mut session, &[EditorEvent::MoveDown, EditorEvent::MoveDown]);
        assert_eq!(session.cursor().row(), 1);
    }

    #[test]
    fn test_insert_events_ignored_in_normal_mode() {
        let mut session = session_with("abc");
        feed(&mut session, &[EditorEvent::InsertCharacter('x')]);
        assert_eq!(session.buffer().lines(), &["abc"]);
        assert!(!session.is_modified());
    }

    #[test]
    fn test_backspace_at_origin_changes_nothing() {
        let mut session = session_with("abc");
        feed(
            &mut session,
            &[EditorEvent::EnterInsertMode, EditorEvent::InsertBackspace],
        );
        assert_eq!(session.buffer().lines(), &["abc"]);
        assert_eq!(session.cursor().position(), (0, 0));
    }

    #[test]
    fn test_escape_from_command_line_discards_text() {
        let mut session = session_with("");
        feed(
            &mut session,
            &[
                EditorEvent::EnterCommandMode,
                EditorEvent::CommandCharacter('q'),
                EditorEvent::ExitMode,
            ],
        );
        assert_eq!(session.mode(), EditorMode::Normal);
        assert_eq!(session.command_buffer(), "");
    }

    #[test]
    fn test_empty_command_returns_to_normal() {
        let mut session = session_with("");
        let outcome = feed(
            &mut session,
            &[EditorEvent::EnterCommandMode, EditorEvent::ExecuteCommand],
        );
        assert_eq!(outcome, EditorOutcome::Continue);
        assert_eq!(session.mode(), EditorMode::Normal);
        assert!(session.message().is_none());
    }

    #[test]
    fn test_write_without_filename_reports_error() {
        let mut storage = MemoryStorage::new();
        let mut session = session_with("text");
        assert!(!session.save(None, &mut storage));
        let message = session.message().unwrap();
        assert_eq!(message.level, MessageLevel::Error);
        assert_eq!(message.text, "No file name. Use :w filename");
    }

    #[test]
    fn test_failed_save_keeps_modified() {
        let mut storage = MemoryStorage::new();
        let mut session = session_with("text");
        session.modified = true;
        assert!(!session.save(Some(""), &mut storage));
        assert!(session.is_modified());
        assert!(session.message().unwrap().text.starts_with("Error saving file:"));
    }

    #[test]
    fn test_editor_inactive_after_force_quit() {
        let mut storage = MemoryStorage::new();
        let mut editor = Editor::new();
        editor.open(None, &storage);
        assert!(editor.is_active());

        for event in [
            EditorEvent::EnterCommandMode,
            EditorEvent::CommandCharacter('q'),
            EditorEvent::CommandCharacter('!'),
            EditorEvent::ExecuteCommand,
        ] {
            editor.handle_event(&event, &mut storage);
        }
        assert!(!editor.is_active());
    }
}
