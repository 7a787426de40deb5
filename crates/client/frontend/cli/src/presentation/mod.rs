//! Ratatui presentation of the shared console.
mod console_view;
pub mod terminal;

pub use console_view::{ConsoleView, TerminalScreen, to_color};
