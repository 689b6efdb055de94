//! Input handling for keyboard events and vim-style keybindings.

pub mod handler;
pub mod keys;

pub use handler::{route_event, InputHandler};
pub use keys::{EditorEvent, ShellEvent};
