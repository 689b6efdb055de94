//! Input event handler for polling and routing keyboard events.

use super::keys::{map_editor_key, map_shell_key, ShellEvent};
use crate::shell::Shell;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use std::time::Duration;
use termion::event::Event;
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin is not a terminal)
    Tty(Events<File>),
}

/// Handles terminal input events and routes them to the shell or the editor.
///
/// While an editor session is open every key goes to the editor; otherwise it
/// is mapped to a prompt action.
pub struct InputHandler {
    /// Event source iterator (maintains position in input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    ///
    /// # Example
    ///
    /// ```
    /// use termquill::input::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin is not attached to the terminal.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Polls for a terminal event.
    ///
    /// Returns Some(Event) if an event occurred, None if the input ended.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails
    pub fn poll_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
        // Reuse the stored iterator so buffered input (paste) is not dropped.
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates the shell.
    ///
    /// Returns Ok(true) if the application should quit.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use termquill::input::InputHandler;
    /// use termquill::shell::Shell;
    /// use termquill::storage::MemoryStorage;
    /// use termion::event::{Event, Key};
    ///
    /// let mut handler = InputHandler::new();
    /// let mut shell = Shell::new(Box::new(MemoryStorage::new()));
    /// let should_quit = handler.handle_event(Event::Key(Key::Ctrl('d')), &mut shell).unwrap();
    /// assert!(should_quit);
    /// ```
    pub fn handle_event(&mut self, event: Event, shell: &mut Shell) -> Result<bool> {
        route_event(event, shell);
        Ok(shell.should_quit())
    }
}

/// Applies one terminal event to `shell`.
///
/// This is the routing used by [`InputHandler::handle_event`], usable without a
/// terminal attached.
pub fn route_event(event: Event, shell: &mut Shell) {
    if let Some(mode) = shell.editor().session().map(|s| s.mode()) {
        let editor_event = map_editor_key(event, &mode);
        shell.handle_editor_event(&editor_event);
        return;
    }

    if !shell.is_input_enabled() {
        return;
    }

    match map_shell_key(event) {
        ShellEvent::Submit => shell.submit_input(),
        ShellEvent::HistoryPrevious => shell.history_previous(),
        ShellEvent::HistoryNext => shell.history_next(),
        ShellEvent::Complete => shell.complete(),
        ShellEvent::InsertCharacter(c) => shell.input_mut().insert(c),
        ShellEvent::Backspace => {
            shell.input_mut().backspace();
        }
        ShellEvent::Delete => {
            shell.input_mut().delete();
        }
        ShellEvent::CursorLeft => shell.input_mut().move_left(),
        ShellEvent::CursorRight => shell.input_mut().move_right(),
        ShellEvent::CursorHome => shell.input_mut().move_home(),
        ShellEvent::CursorEnd => shell.input_mut().move_end(),
        ShellEvent::CancelLine => shell.cancel_line(),
        ShellEvent::ClearScreen => shell.clear_transcript(),
        ShellEvent::EndOfInput => {
            if shell.input().is_empty() {
                shell.request_exit();
            } else {
                shell.input_mut().delete();
            }
        }
        ShellEvent::Unknown => {}
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
