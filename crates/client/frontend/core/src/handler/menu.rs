use client_bootstrap::{MenuBackground, SessionFactory};
use game_core::color;
use runtime::SaveService;
use strum::IntoEnumIterator;

use super::{DispatchResult, Handler, HandlerError, SessionHandler};
use crate::console::{Cell, Console};
use crate::event::{InputEvent, Key};

pub const TITLE: &str = "TOMBS OF THE ANCIENT KINGS";
pub const CREDIT: &str = "By the Dungeon developers";
pub const NO_SAVE_NOTICE: &str = "No saved game to load.";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load save.";
pub const WELCOME_BACK: &str = "Welcome back, adventurer!";

const MENU_WIDTH: usize = 24;
const BACKGROUND_DIM_PERCENT: u16 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter, strum::Display)]
pub enum MenuOption {
    #[strum(to_string = "[N] Play a new game")]
    NewGame,
    #[strum(to_string = "[C] Continue last game")]
    Continue,
    #[strum(to_string = "[Q] Quit")]
    Quit,
}

/// Title screen: start a new game, continue the saved one, or quit.
pub struct MainMenu {
    factory: SessionFactory,
    saves: SaveService,
    background: MenuBackground,
    notice: Option<String>,
}

impl MainMenu {
    pub fn new(factory: SessionFactory, saves: SaveService, background: MenuBackground) -> Self {
        Self {
            factory,
            saves,
            background,
            notice: None,
        }
    }

    /// Line shown under the options after a failed action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn render(&self, console: &mut Console) {
        for (y, row) in self.background.rows().iter().enumerate() {
            console.print(0, y as i32, row, color::MENU_TEXT.scaled(BACKGROUND_DIM_PERCENT));
        }

        let center = console.height() as i32 / 2;
        console.print_centered(center - 4, TITLE, color::MENU_TITLE);
        console.print_centered(console.height() as i32 - 2, CREDIT, color::MENU_TITLE);

        let x = (console.width() as i32 - MENU_WIDTH as i32) / 2;
        for (i, option) in MenuOption::iter().enumerate() {
            let y = center - 2 + i as i32;
            let backdrop = Cell {
                glyph: ' ',
                fg: color::MENU_TEXT,
                bg: color::BLACK,
            };
            console.fill_rect(x, y, MENU_WIDTH as i32, 1, backdrop);
            console.print(x, y, &format!("{:<MENU_WIDTH$}", option.to_string()), color::MENU_TEXT);
        }

        if let Some(notice) = &self.notice {
            console.print_centered(center + 2, notice, color::INVALID);
        }
    }

    pub fn dispatch(&mut self, event: InputEvent) -> DispatchResult {
        let InputEvent::Key(key) = event else {
            return Ok(None);
        };

        match key.code {
            Key::Esc => Err(HandlerError::QuitWithoutSaving),
            Key::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => Err(HandlerError::QuitWithoutSaving),
                'n' => self.new_game(),
                'c' => self.continue_game(),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }

    fn new_game(&mut self) -> DispatchResult {
        match self.factory.new_game() {
            Ok(session) => {
                tracing::info!(seed = session.seed(), "starting new game");
                Ok(Some(Handler::ActiveSession(SessionHandler::new(
                    session,
                    self.saves.clone(),
                ))))
            }
            Err(err) => {
                self.notice = Some(format!("Could not start a new game: {err}"));
                Err(HandlerError::Failed(
                    anyhow::Error::new(err).context("starting a new game"),
                ))
            }
        }
    }

    fn continue_game(&mut self) -> DispatchResult {
        match self.saves.load_primary() {
            Ok(Some(mut session)) => {
                tracing::info!(turn = session.turn(), "continuing saved game");
                session.log.add_message(WELCOME_BACK, color::WELCOME_TEXT);
                Ok(Some(Handler::ActiveSession(SessionHandler::new(
                    session,
                    self.saves.clone(),
                ))))
            }
            Ok(None) => {
                self.notice = Some(NO_SAVE_NOTICE.to_owned());
                Ok(None)
            }
            Err(err) => {
                tracing::warn!(
                    slot = %self.saves.slots().primary,
                    error = %err,
                    "failed to load saved game"
                );
                self.notice = Some(LOAD_FAILED_NOTICE.to_owned());
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_content::EntityTemplates;
    use game_core::GenerationParams;
    use runtime::{InMemorySessionRepo, SaveSlots};

    use super::*;
    use crate::event::KeyInput;

    fn menu() -> (MainMenu, Arc<InMemorySessionRepo>) {
        let repo = Arc::new(InMemorySessionRepo::new());
        let factory = SessionFactory::new(
            GenerationParams::default().with_seed(9),
            Arc::new(EntityTemplates::default()),
            16,
        );
        let saves = SaveService::new(repo.clone(), SaveSlots::default());
        (MainMenu::new(factory, saves, MenuBackground::default()), repo)
    }

    #[test]
    fn unrecognised_input_changes_nothing() {
        let (mut menu, repo) = menu();
        let mut before = Console::new(80, 50);
        menu.render(&mut before);

        for event in [
            InputEvent::Key(KeyInput::char('x')),
            InputEvent::Key(KeyInput::new(Key::Tab)),
            InputEvent::Resize { width: 100, height: 40 },
        ] {
            assert!(matches!(menu.dispatch(event), Ok(None)));
        }

        let mut after = Console::new(80, 50);
        menu.render(&mut after);
        assert_eq!(before.cells(), after.cells());
        assert_eq!(menu.notice(), None);
        assert!(repo.slots().is_empty());
    }

    #[test]
    fn new_game_starts_with_welcome_message() {
        let (mut menu, _) = menu();

        let Ok(Some(Handler::ActiveSession(handler))) =
            menu.dispatch(InputEvent::Key(KeyInput::char('n')))
        else {
            panic!("expected an active session");
        };

        let first = handler.session().log.first().unwrap();
        assert_eq!(first.text, client_bootstrap::WELCOME_MESSAGE);
        assert_eq!(first.color, color::WELCOME_TEXT);
    }
}
