//! Input handlers: the state machine the main loop drives.
//!
//! Exactly one [`Handler`] is current at a time. `dispatch` either keeps it
//! (`Ok(None)`), asks for a replacement (`Ok(Some(next))`), or raises a
//! [`HandlerError`] the main loop turns into a termination or a logged
//! message. The live [`Session`] is only reachable through the handler.

mod menu;
mod session;

pub use menu::{MainMenu, MenuOption};
pub use session::{SessionHandler, SessionMode};

use game_core::Session;
use thiserror::Error;

use crate::console::Console;
use crate::event::InputEvent;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// Leave immediately; nothing is saved.
    #[error("quit without saving")]
    QuitWithoutSaving,

    /// Normal termination; the active session is saved first.
    #[error("exit requested")]
    Exit,

    /// Recoverable failure: reported to the player, play continues.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

pub type DispatchResult = Result<Option<Handler>, HandlerError>;

#[derive(strum::IntoStaticStr)]
pub enum Handler {
    MainMenu(MainMenu),
    ActiveSession(SessionHandler),
}

impl Handler {
    /// Repaints the whole console for the current state.
    pub fn render(&self, console: &mut Console) {
        match self {
            Self::MainMenu(menu) => menu.render(console),
            Self::ActiveSession(handler) => handler.render(console),
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> DispatchResult {
        match self {
            Self::MainMenu(menu) => menu.dispatch(event),
            Self::ActiveSession(handler) => handler.dispatch(event),
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::MainMenu(_) => None,
            Self::ActiveSession(handler) => Some(handler.session()),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match self {
            Self::MainMenu(_) => None,
            Self::ActiveSession(handler) => Some(handler.session_mut()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}
