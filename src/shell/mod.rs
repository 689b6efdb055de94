//! Command shell.
//!
//! # Modules
//!
//! - `commands`: Built-in command set
//! - `completion`: Prefix matching and common-prefix reduction for Tab
//! - `history`: Submitted lines and Up/Down browsing
//! - `input_line`: Prompt text and caret
//! - `registry`: Name to handler mapping
//! - `state`: The [`Shell`] itself: dispatch, confirmation, editor hosting
//! - `transcript`: Output sink and scrollback

pub mod commands;
pub mod completion;
pub mod history;
pub mod input_line;
pub mod registry;
pub mod state;
pub mod transcript;

pub use registry::{CommandEntry, CommandRegistry};
pub use state::{Shell, ShellSettings};
pub use transcript::{LineStyle, OutputSink, Transcript, TranscriptLine};
