//! Cross-frontend primitives for presenting the game.
//!
//! Houses the character console, input events, the handler state machine and
//! the main loop that drives them. Concrete front-ends (the terminal client)
//! only supply a [`Screen`] and an [`EventSource`].
pub mod config;
pub mod console;
pub mod event;
pub mod frontend;
pub mod handler;
pub mod main_loop;
pub mod render;

pub use config::FrontendConfig;
pub use console::{Cell, Console, Screen};
pub use event::{EventSource, InputEvent, Key, KeyInput, KeyModifiers};
pub use frontend::Frontend;
pub use handler::{Handler, HandlerError, MainMenu, SessionHandler, SessionMode};
pub use main_loop::{MainLoop, Termination};
