//! Keyboard event mapping and input event types.

use crate::editor::mode::EditorMode;
use termion::event::{Event, Key};

/// High-level editor events abstracted from raw keyboard input.
///
/// Each editor mode has its own closed key table; a key that is not in the
/// table of the current mode maps to [`EditorEvent::Unknown`] and is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Move cursor left (Normal)
    MoveLeft,
    /// Move cursor right (Normal)
    MoveRight,
    /// Move cursor up (Normal)
    MoveUp,
    /// Move cursor down (Normal)
    MoveDown,
    /// Enter insert mode (Normal `i`)
    EnterInsertMode,
    /// Enter command-line mode (Normal `:`)
    EnterCommandMode,
    /// Escape back to normal mode
    ExitMode,
    /// Insert a character in insert mode
    InsertCharacter(char),
    /// Enter in insert mode
    InsertEnter,
    /// Backspace in insert mode
    InsertBackspace,
    /// Type a character on the command line
    CommandCharacter(char),
    /// Backspace on the command line
    CommandBackspace,
    /// Enter on the command line
    ExecuteCommand,
    /// Unknown or unmapped key
    Unknown,
}

/// High-level events for the shell prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Submit the current line (Enter)
    Submit,
    /// Recall an older history entry (Up)
    HistoryPrevious,
    /// Recall a newer history entry (Down)
    HistoryNext,
    /// Tab completion
    Complete,
    /// Insert a character at the caret
    InsertCharacter(char),
    /// Delete the character before the caret
    Backspace,
    /// Delete the character under the caret
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Abandon the current line (Ctrl-C)
    CancelLine,
    /// Clear the transcript (Ctrl-L)
    ClearScreen,
    /// Ctrl-D: quit on an empty line, otherwise delete
    EndOfInput,
    /// Unknown or unmapped key
    Unknown,
}

/// Returns true for characters that can be typed into text.
fn is_printable(c: char) -> bool {
    c == '\t' || !c.is_control()
}

/// Maps a termion Event to an EditorEvent based on the current editor mode.
///
/// - Normal mode: hjkl (and arrows) for movement, `i` for insert, `:` for command line
/// - Insert mode: printable characters, Enter, Backspace, Esc to exit
/// - CommandLine mode: printable characters, Enter to run, Backspace, Esc to cancel
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use termquill::editor::mode::EditorMode;
/// use termquill::input::keys::{map_editor_key, EditorEvent};
///
/// let event = Event::Key(Key::Char('j'));
/// assert_eq!(map_editor_key(event, &EditorMode::Normal), EditorEvent::MoveDown);
/// ```
pub fn map_editor_key(event: Event, mode: &EditorMode) -> EditorEvent {
    let key = match event {
        Event::Key(k) => k,
        _ => return EditorEvent::Unknown,
    };

    match mode {
        EditorMode::Normal => match key {
            Key::Char('h') | Key::Left => EditorEvent::MoveLeft,
            Key::Char('l') | Key::Right => EditorEvent::MoveRight,
            Key::Char('k') | Key::Up => EditorEvent::MoveUp,
            Key::Char('j') | Key::Down => EditorEvent::MoveDown,
            Key::Char('i') => EditorEvent::EnterInsertMode,
            Key::Char(':') => EditorEvent::EnterCommandMode,
            _ => EditorEvent::Unknown,
        },
        EditorMode::Insert => match key {
            Key::Esc => EditorEvent::ExitMode,
            Key::Char('\n') => EditorEvent::InsertEnter,
            Key::Backspace => EditorEvent::InsertBackspace,
            Key::Char(c) if is_printable(c) => EditorEvent::InsertCharacter(c),
            _ => EditorEvent::Unknown,
        },
        EditorMode::CommandLine => match key {
            Key::Esc => EditorEvent::ExitMode,
            Key::Char('\n') => EditorEvent::ExecuteCommand,
            Key::Backspace => EditorEvent::CommandBackspace,
            Key::Char(c) if is_printable(c) => EditorEvent::CommandCharacter(c),
            _ => EditorEvent::Unknown,
        },
    }
}

/// Maps a termion Event to a ShellEvent for the prompt line.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use termquill::input::keys::{map_shell_key, ShellEvent};
///
/// assert_eq!(map_shell_key(Event::Key(Key::Char('\t'))), ShellEvent::Complete);
/// assert_eq!(map_shell_key(Event::Key(Key::Up)), ShellEvent::HistoryPrevious);
/// ```
pub fn map_shell_key(event: Event) -> ShellEvent {
    let key = match event {
        Event::Key(k) => k,
        _ => return ShellEvent::Unknown,
    };

    match key {
        Key::Char('\n') => ShellEvent::Submit,
        Key::Char('\t') => ShellEvent::Complete,
        Key::Up => ShellEvent::HistoryPrevious,
        Key::Down => ShellEvent::HistoryNext,
        Key::Left => ShellEvent::CursorLeft,
        Key::Right => ShellEvent::CursorRight,
        Key::Home | Key::Ctrl('a') => ShellEvent::CursorHome,
        Key::End | Key::Ctrl('e') => ShellEvent::CursorEnd,
        Key::Backspace => ShellEvent::Backspace,
        Key::Delete => ShellEvent::Delete,
        Key::Ctrl('c') => ShellEvent::CancelLine,
        Key::Ctrl('l') => ShellEvent::ClearScreen,
        Key::Ctrl('d') => ShellEvent::EndOfInput,
        Key::Char(c) if is_printable(c) => ShellEvent::InsertCharacter(c),
        _ => ShellEvent::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_mode_movement_vim_keys() {
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('h')), &EditorMode::Normal),
            EditorEvent::MoveLeft
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('l')), &EditorMode::Normal),
            EditorEvent::MoveRight
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('k')), &EditorMode::Normal),
            EditorEvent::MoveUp
        );
    }

    #[test]
    fn test_normal_mode_enter_modes() {
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('i')), &EditorMode::Normal),
            EditorEvent::EnterInsertMode
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Char(':')), &EditorMode::Normal),
            EditorEvent::EnterCommandMode
        );
    }

    #[test]
    fn test_normal_mode_ignores_text_keys() {
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('x')), &EditorMode::Normal),
            EditorEvent::Unknown
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Esc), &EditorMode::Normal),
            EditorEvent::Unknown
        );
    }

    #[test]
    fn test_insert_mode_keys() {
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('h')), &EditorMode::Insert),
            EditorEvent::InsertCharacter('h')
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('\n')), &EditorMode::Insert),
            EditorEvent::InsertEnter
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Esc), &EditorMode::Insert),
            EditorEvent::ExitMode
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Ctrl('x')), &EditorMode::Insert),
            EditorEvent::Unknown
        );
    }

    #[test]
    fn test_command_line_keys() {
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('w')), &EditorMode::CommandLine),
            EditorEvent::CommandCharacter('w')
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Char('\n')), &EditorMode::CommandLine),
            EditorEvent::ExecuteCommand
        );
        assert_eq!(
            map_editor_key(Event::Key(Key::Esc), &EditorMode::CommandLine),
            EditorEvent::ExitMode
        );
    }

    #[test]
    fn test_shell_keys() {
        assert_eq!(map_shell_key(Event::Key(Key::Char('\n'))), ShellEvent::Submit);
        assert_eq!(map_shell_key(Event::Key(Key::Down)), ShellEvent::HistoryNext);
        assert_eq!(
            map_shell_key(Event::Key(Key::Char('a'))),
            ShellEvent::InsertCharacter('a')
        );
        assert_eq!(map_shell_key(Event::Key(Key::Ctrl('c'))), ShellEvent::CancelLine);
        assert_eq!(map_shell_key(Event::Key(Key::F(5))), ShellEvent::Unknown);
    }
}
