//! Game state and rules shared by the session factory, persistence and clients.
//!
//! `game-core` defines the session model (player, map, message log), the
//! dungeon generator that populates it, and the player actions that mutate
//! it. Supporting crates depend on the types re-exported here.
pub mod action;
pub mod color;
pub mod config;
pub mod entity;
pub mod error;
pub mod map;
pub mod message;
pub mod oracle;
pub mod position;
pub mod procgen;
pub mod session;

pub use action::Action;
pub use color::Rgb;
pub use config::GenerationParams;
pub use entity::{
    Actor, AiKind, Consumable, Entity, EntityKind, Fighter, Inventory, Item, RenderOrder,
};
pub use error::{ActionError, GenerationError, MapError};
pub use map::{GameMap, RectangularRoom, TileKind};
pub use message::{Message, MessageLog};
pub use oracle::{SpawnEntry, TemplateOracle};
pub use position::Position;
pub use procgen::generate_dungeon;
pub use session::Session;
