//! TermQuill - a terminal console shell hosting a vim-style text editor.
//!
//! The crate is split into a small set of modules:
//!
//! - [`shell`]: command registry, history, tab-completion, dispatch and the
//!   built-in command set
//! - [`editor`]: the line buffer and the Normal/Insert/CommandLine state machine
//! - [`storage`]: named file storage used by the editor and file commands
//! - [`docs`]: manual pages shown by the `man` command
//! - [`input`]: terminal key mapping and event routing
//! - [`ui`]: ratatui rendering of the shell and the editor
//! - [`config`] and [`theme`]: user settings and color schemes

pub mod config;
pub mod docs;
pub mod editor;
pub mod input;
pub mod shell;
pub mod storage;
pub mod theme;
pub mod ui;
