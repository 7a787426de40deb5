use anyhow::Context;
use game_core::{Action, Session, color};
use runtime::SaveService;

use super::{DispatchResult, HandlerError};
use crate::console::Console;
use crate::event::{InputEvent, Key, KeyInput};
use crate::render;

pub const SAVED_NOTICE: &str = "Game saved.";

/// Sub-state of an active session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Play,
    /// Scrolling the message log; `cursor` is the newest message shown.
    History { cursor: usize },
}

/// Handler owning the live session.
pub struct SessionHandler {
    session: Session,
    mode: SessionMode,
    saves: SaveService,
}

impl SessionHandler {
    pub fn new(session: Session, saves: SaveService) -> Self {
        Self {
            session,
            mode: SessionMode::Play,
            saves,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn render(&self, console: &mut Console) {
        render::render_session(console, &self.session);
        if let SessionMode::History { cursor } = self.mode {
            render::render_history(console, &self.session, cursor);
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> DispatchResult {
        let InputEvent::Key(key) = event else {
            return Ok(None);
        };

        match self.mode {
            SessionMode::Play => self.dispatch_play(key),
            SessionMode::History { cursor } => {
                self.dispatch_history(key, cursor);
                Ok(None)
            }
        }
    }

    fn dispatch_play(&mut self, key: KeyInput) -> DispatchResult {
        if key.is_ctrl('s') {
            return self.quicksave();
        }

        match key.code {
            Key::Esc => Err(HandlerError::Exit),
            Key::Char('v') => {
                let cursor = self.session.log.len().saturating_sub(1);
                self.mode = SessionMode::History { cursor };
                Ok(None)
            }
            _ => match action_for(key) {
                Some(action) => self.perform(action),
                None => Ok(None),
            },
        }
    }

    fn dispatch_history(&mut self, key: KeyInput, cursor: usize) {
        let last = self.session.log.len().saturating_sub(1);
        let cursor = match key.code {
            Key::Up | Key::Char('k') => cursor.saturating_sub(1),
            Key::Down | Key::Char('j') => (cursor + 1).min(last),
            Key::PageUp => cursor.saturating_sub(10),
            Key::PageDown => (cursor + 10).min(last),
            Key::Home => 0,
            Key::End => last,
            _ => {
                self.mode = SessionMode::Play;
                return;
            }
        };
        self.mode = SessionMode::History { cursor };
    }

    fn perform(&mut self, action: Action) -> DispatchResult {
        match self.session.perform(action) {
            Ok(()) => Ok(None),
            Err(err) if err.is_impossible() => {
                self.session.log.add_message(err.to_string(), color::IMPOSSIBLE);
                Ok(None)
            }
            Err(err) => Err(HandlerError::Failed(
                anyhow::Error::new(err).context(format!("resolving {action:?}")),
            )),
        }
    }

    fn quicksave(&mut self) -> DispatchResult {
        self.saves
            .save_primary(&self.session)
            .context("quicksave failed")?;
        self.session.log.add_message(SAVED_NOTICE, color::WELCOME_TEXT);
        Ok(None)
    }
}

/// Movement, waiting and pickup bindings.
pub fn action_for(key: KeyInput) -> Option<Action> {
    let action = match key.code {
        Key::Up => Action::step(0, -1),
        Key::Down => Action::step(0, 1),
        Key::Left => Action::step(-1, 0),
        Key::Right => Action::step(1, 0),
        Key::Home => Action::step(-1, -1),
        Key::End => Action::step(-1, 1),
        Key::PageUp => Action::step(1, -1),
        Key::PageDown => Action::step(1, 1),
        Key::Char(ch) => match ch {
            'k' | '8' => Action::step(0, -1),
            'j' | '2' => Action::step(0, 1),
            'h' | '4' => Action::step(-1, 0),
            'l' | '6' => Action::step(1, 0),
            'y' | '7' => Action::step(-1, -1),
            'u' | '9' => Action::step(1, -1),
            'b' | '1' => Action::step(-1, 1),
            'n' | '3' => Action::step(1, 1),
            '.' | '5' => Action::Wait,
            'g' => Action::Pickup,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}
