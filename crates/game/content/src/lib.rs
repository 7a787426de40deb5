//! Static game content and loaders for the data files that override it.
//!
//! This crate houses the entity templates (player, monsters, items) and their
//! spawn weights, plus loaders for RON/TOML data files:
//! - Entity templates (data-driven via RON)
//! - Dungeon generation parameters (data-driven via TOML)
//!
//! Content is consumed by the session factory; templates are cloned into a
//! session and never referenced by game state afterwards.

pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use templates::EntityTemplates;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, EntityLoader, GenerationLoader};
