//! Save slots and the service the client saves through.

use std::sync::Arc;

use game_core::Session;

use crate::repository::{Result, SessionRepository};

/// Slot names used by the client.
///
/// `primary` is written on normal exit and quicksave and read by "continue".
/// `fallback` is written when the client terminates unexpectedly, so a crash
/// never overwrites the last good save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveSlots {
    pub primary: String,
    pub fallback: String,
}

impl SaveSlots {
    pub const DEFAULT_PRIMARY: &'static str = "savegame.sav";
    pub const DEFAULT_FALLBACK: &'static str = "save_game.sav";

    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }
}

impl Default for SaveSlots {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRIMARY, Self::DEFAULT_FALLBACK)
    }
}

/// Cheap-to-clone handle pairing a repository with the slot layout.
#[derive(Clone)]
pub struct SaveService {
    repo: Arc<dyn SessionRepository>,
    slots: SaveSlots,
}

impl SaveService {
    pub fn new(repo: Arc<dyn SessionRepository>, slots: SaveSlots) -> Self {
        Self { repo, slots }
    }

    pub fn slots(&self) -> &SaveSlots {
        &self.slots
    }

    pub fn save_primary(&self, session: &Session) -> Result<()> {
        self.repo.save(&self.slots.primary, session)?;
        tracing::info!(slot = %self.slots.primary, turn = session.turn(), "session saved");
        Ok(())
    }

    pub fn save_fallback(&self, session: &Session) -> Result<()> {
        self.repo.save(&self.slots.fallback, session)?;
        tracing::info!(slot = %self.slots.fallback, turn = session.turn(), "session saved after crash");
        Ok(())
    }

    pub fn load_primary(&self) -> Result<Option<Session>> {
        self.repo.load(&self.slots.primary)
    }

    pub fn has_primary(&self) -> bool {
        self.repo.exists(&self.slots.primary)
    }
}

impl std::fmt::Debug for SaveService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveService")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}
