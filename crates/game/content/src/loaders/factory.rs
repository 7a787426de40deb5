//! Content factory for building templates and parameters from data files.

use std::path::{Path, PathBuf};

use game_core::GenerationParams;

use crate::loaders::{EntityLoader, GenerationLoader, LoadResult};
use crate::templates::EntityTemplates;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── entities.ron
/// └── generation.toml
/// ```
///
/// Both files are optional; the `*_or_default` accessors fall back to the
/// built-in content when a file is absent.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const ENTITIES_FILE: &'static str = "entities.ron";
    pub const GENERATION_FILE: &'static str = "generation.toml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load entity templates from `entities.ron`.
    pub fn load_templates(&self) -> LoadResult<EntityTemplates> {
        EntityLoader::load(&self.data_dir.join(Self::ENTITIES_FILE))
    }

    /// Load generation parameters from `generation.toml`.
    pub fn load_generation(&self) -> LoadResult<GenerationParams> {
        GenerationLoader::load(&self.data_dir.join(Self::GENERATION_FILE))
    }

    pub fn templates_or_default(&self) -> LoadResult<EntityTemplates> {
        if self.data_dir.join(Self::ENTITIES_FILE).exists() {
            self.load_templates()
        } else {
            Ok(EntityTemplates::default())
        }
    }

    pub fn generation_or_default(&self) -> LoadResult<GenerationParams> {
        if self.data_dir.join(Self::GENERATION_FILE).exists() {
            self.load_generation()
        } else {
            Ok(GenerationParams::default())
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding the data files shipped with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }
}
