//! Repository contract for saving and loading sessions.

use game_core::Session;

use crate::repository::Result;

/// Storage for whole sessions, keyed by slot name.
///
/// `save` is synchronous and overwrites whatever the slot held before. A slot
/// that was never written loads as `Ok(None)`.
pub trait SessionRepository: Send + Sync {
    fn save(&self, slot: &str, session: &Session) -> Result<()>;

    fn load(&self, slot: &str) -> Result<Option<Session>>;

    fn exists(&self, slot: &str) -> bool;
}
