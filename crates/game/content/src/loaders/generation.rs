//! Dungeon generation parameter loader.

use std::path::Path;

use game_core::GenerationParams;

use crate::loaders::{LoadResult, read_file};

/// Loader for generation parameters from TOML files.
///
/// Missing keys fall back to [`GenerationParams::default`].
pub struct GenerationLoader;

impl GenerationLoader {
    pub fn load(path: &Path) -> LoadResult<GenerationParams> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GenerationParams> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse generation TOML: {}", e))
    }
}
