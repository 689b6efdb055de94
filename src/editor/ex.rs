//! Ex-command parsing for the editor's command line.
//!
//! The command line accepts a deliberately small language: a command word
//! optionally followed by one filename argument. Tokens after the filename
//! are ignored, as is any argument to `q` and `q!`.
//!
//! | input       | command                  |
//! |-------------|--------------------------|
//! | `w [name]`  | [`ExCommand::Write`]     |
//! | `q`         | [`ExCommand::Quit`]      |
//! | `wq [name]` | [`ExCommand::WriteQuit`] |
//! | `q!`        | [`ExCommand::ForceQuit`] |

use thiserror::Error;

/// Error produced when the command line does not hold a valid ex-command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExError {
    #[error("Not an editor command: {0}")]
    NotAnEditorCommand(String),
}

/// A parsed ex-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    /// Save the buffer, optionally under a new name.
    Write(Option<String>),
    /// Close if there are no unsaved changes.
    Quit,
    /// Close and discard changes.
    ForceQuit,
    /// Save, then close if the save succeeded.
    WriteQuit(Option<String>),
}

impl ExCommand {
    /// Parses a command line (without the leading `:`).
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use termquill::editor::ex::{ExCommand, ExError};
    ///
    /// assert_eq!(ExCommand::parse("w notes.txt"), Ok(Some(ExCommand::Write(Some("notes.txt".to_string())))));
    /// assert_eq!(ExCommand::parse("  q! "), Ok(Some(ExCommand::ForceQuit)));
    /// assert_eq!(ExCommand::parse(""), Ok(None));
    /// assert_eq!(
    ///     ExCommand::parse("s/a/b/"),
    ///     Err(ExError::NotAnEditorCommand("s/a/b/".to_string()))
    /// );
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, ExError> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(None);
        };
        let argument = tokens.next().map(|s| s.to_string());

        let parsed = match command {
            "w" => ExCommand::Write(argument),
            "wq" => ExCommand::WriteQuit(argument),
            "q" => ExCommand::Quit,
            "q!" => ExCommand::ForceQuit,
            other => return Err(ExError::NotAnEditorCommand(other.to_string())),
        };
        Ok(Some(parsed))
    }
}
