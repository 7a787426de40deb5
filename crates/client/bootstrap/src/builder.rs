//! Builds the session factory, save service and menu assets used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{FileSessionRepository, SaveService, SessionRepository};

use crate::background::MenuBackground;
use crate::config::RuntimeConfig;
use crate::content::{ContentSource, DataDirContent};
use crate::session::SessionFactory;

/// Builder that assembles content, persistence and configuration for clients.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Arc<dyn ContentSource>,
    repository: Option<Arc<dyn SessionRepository>>,
}

impl RuntimeBuilder {
    pub fn new(config: RuntimeConfig) -> Self {
        let content = DataDirContent::resolve(config.content_dir.as_deref());
        Self {
            config,
            content: Arc::new(content),
            repository: None,
        }
    }

    /// Provide a custom content source (e.g., built-in templates in tests).
    pub fn content_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.content = Arc::new(source);
        self
    }

    /// Provide a custom repository instead of files under `SAVE_DATA_DIR`.
    pub fn repository(mut self, repository: Arc<dyn SessionRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let bundle = self.content.load()?;
        let params = self.config.generation.apply(bundle.generation);
        let factory = SessionFactory::new(params, bundle.templates, self.config.messages.capacity);

        let repository = match self.repository {
            Some(repository) => repository,
            None => {
                let dir = &self.config.saves.dir;
                let repo = FileSessionRepository::new(dir)
                    .with_context(|| format!("creating save directory {}", dir.display()))?;
                Arc::new(repo) as Arc<dyn SessionRepository>
            }
        };
        let saves = SaveService::new(repository, self.config.saves.slots.clone());

        let background = match &self.config.menu_background {
            Some(path) => MenuBackground::load(path)?,
            None => MenuBackground::builtin(),
        };

        tracing::info!(
            save_dir = %self.config.saves.dir.display(),
            seed = ?factory.params().seed,
            "runtime setup complete"
        );

        Ok(RuntimeSetup {
            config: self.config,
            factory,
            saves,
            background,
        })
    }
}

pub struct RuntimeSetup {
    pub config: RuntimeConfig,
    pub factory: SessionFactory,
    pub saves: SaveService,
    pub background: MenuBackground,
}
