//! Creating fresh game sessions.

use std::sync::Arc;

use game_core::{GenerationError, GenerationParams, Session, TemplateOracle, color, generate_dungeon};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub const WELCOME_MESSAGE: &str = "Hello and welcome, adventurer, to yet another dungeon!";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("dungeon generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Builds new sessions from generation parameters and entity templates.
///
/// Holds no mutable state: every call to [`new_game`](Self::new_game) starts
/// from a fresh copy of the player template.
#[derive(Clone)]
pub struct SessionFactory {
    params: GenerationParams,
    templates: Arc<dyn TemplateOracle>,
    log_capacity: usize,
}

impl SessionFactory {
    pub fn new(
        params: GenerationParams,
        templates: Arc<dyn TemplateOracle>,
        log_capacity: usize,
    ) -> Self {
        Self {
            params,
            templates,
            log_capacity,
        }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generates a dungeon and returns a session with the player placed in it.
    ///
    /// Uses `params.seed` when set, otherwise draws a fresh seed. Either way
    /// the seed is recorded on the session. On failure nothing is returned
    /// and the templates are untouched.
    pub fn new_game(&self) -> Result<Session, SessionError> {
        let mut player = self.templates.player().clone();
        let seed = self.params.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let map = generate_dungeon(&self.params, &mut player, self.templates.as_ref(), &mut rng)?;

        tracing::info!(
            seed,
            rooms = map.rooms.len(),
            entities = map.entities.len(),
            "generated new dungeon"
        );

        let mut session = Session::new(player, map, seed, self.log_capacity);
        session.log.add_message(WELCOME_MESSAGE, color::WELCOME_TEXT);
        Ok(session)
    }
}
