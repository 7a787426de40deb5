//! In-memory SessionRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::Session;

use crate::repository::{RepositoryError, Result, SessionRepository};

/// In-memory implementation of SessionRepository.
///
/// Sessions are cloned on save and load, so callers never share state with
/// the stored copy.
pub struct InMemorySessionRepo {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create with a session already stored under `slot`.
    pub fn with_session(slot: impl Into<String>, session: Session) -> Self {
        let mut sessions = HashMap::new();
        sessions.insert(slot.into(), session);
        Self {
            sessions: RwLock::new(sessions),
        }
    }

    /// Names of all occupied slots, sorted.
    pub fn slots(&self) -> Vec<String> {
        let mut slots: Vec<String> = self
            .sessions
            .read()
            .map(|sessions| sessions.keys().cloned().collect())
            .unwrap_or_default();
        slots.sort();
        slots
    }
}

impl Default for InMemorySessionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionRepo {
    fn save(&self, slot: &str, session: &Session) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sessions.insert(slot.to_owned(), session.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<Session>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sessions.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.sessions
            .read()
            .map(|sessions| sessions.contains_key(slot))
            .unwrap_or(false)
    }
}
