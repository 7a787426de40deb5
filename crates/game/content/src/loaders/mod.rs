//! Content loaders for reading game data from files.
//!
//! Loaders convert RON/TOML files into the types consumed by session
//! creation: [`EntityTemplates`](crate::EntityTemplates) and
//! [`GenerationParams`](game_core::GenerationParams).

pub mod entities;
pub mod factory;
pub mod generation;

pub use entities::{ActorSpec, EntityCatalogSpec, EntityLoader, ItemSpec};
pub use factory::ContentFactory;
pub use generation::GenerationLoader;

use std::path::Path;

use anyhow::Context;

pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
