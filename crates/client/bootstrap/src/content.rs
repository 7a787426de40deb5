//! Helpers for assembling the content a session factory is built from.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::{ContentFactory, EntityTemplates};
use game_core::{GenerationParams, TemplateOracle};

/// Templates and base generation parameters, ready to hand to a
/// [`SessionFactory`](crate::SessionFactory).
#[derive(Clone)]
pub struct ContentBundle {
    pub templates: Arc<dyn TemplateOracle>,
    pub generation: GenerationParams,
}

impl ContentBundle {
    pub fn new(templates: Arc<dyn TemplateOracle>, generation: GenerationParams) -> Self {
        Self {
            templates,
            generation,
        }
    }
}

pub trait ContentSource: Send + Sync {
    fn load(&self) -> Result<ContentBundle>;
}

/// Content compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn load(&self) -> Result<ContentBundle> {
        Ok(ContentBundle::new(
            Arc::new(EntityTemplates::default()),
            GenerationParams::default(),
        ))
    }
}

/// Content source that reads data files through `game-content` loaders.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── entities.ron     (optional)
/// └── generation.toml  (optional)
/// ```
///
/// A missing file falls back to the built-in content; a malformed one is an
/// error.
#[derive(Clone, Debug)]
pub struct DataDirContent {
    data_dir: PathBuf,
}

impl DataDirContent {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Use `configured` when given, otherwise the data directory shipped with
    /// `game-content`.
    pub fn resolve(configured: Option<&Path>) -> Self {
        match configured {
            Some(dir) => Self::new(dir),
            None => Self::new(ContentFactory::bundled_data_dir()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl ContentSource for DataDirContent {
    fn load(&self) -> Result<ContentBundle> {
        if !self.data_dir.is_dir() {
            tracing::warn!(
                dir = %self.data_dir.display(),
                "content data directory not found, using built-in content"
            );
            return BuiltinContent.load();
        }

        let factory = ContentFactory::new(&self.data_dir);
        let templates = factory
            .templates_or_default()
            .with_context(|| format!("loading entity templates from {}", self.data_dir.display()))?;
        let generation = factory.generation_or_default().with_context(|| {
            format!("loading generation parameters from {}", self.data_dir.display())
        })?;

        tracing::debug!(
            dir = %self.data_dir.display(),
            monsters = templates.monsters.len(),
            items = templates.items.len(),
            "loaded content"
        );

        Ok(ContentBundle::new(Arc::new(templates), generation))
    }
}
