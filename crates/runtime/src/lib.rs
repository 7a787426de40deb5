//! Session persistence for the dungeon client.
//!
//! Repositories handle data that CHANGES during gameplay: the live
//! [`Session`](game_core::Session) written on quicksave, exit and crash.
//! Static game content (templates, generation parameters) lives in
//! `game-content`, not here.
//!
//! - [`repository`] defines the storage contract and its file/memory backends
//! - [`saves`] names the save slots and wraps a repository for the client
pub mod repository;
pub mod saves;

pub use repository::{
    FileSessionRepository, InMemorySessionRepo, RepositoryError, Result, SessionRepository,
};
pub use saves::{SaveService, SaveSlots};
