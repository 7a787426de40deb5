//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};
use client_bootstrap::{MenuBackground, RuntimeSetup, SessionFactory};
use runtime::SaveService;

use crate::{Client, Frontend};

/// Builder for constructing a Client with proper validation.
///
/// Setup parts and a frontend are required; `build()` fails fast when one is
/// missing.
#[derive(Default)]
pub struct ClientBuilder {
    factory: Option<SessionFactory>,
    saves: Option<SaveService>,
    background: Option<MenuBackground>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take factory, saves and background from a [`RuntimeSetup`].
    pub fn setup(self, setup: RuntimeSetup) -> Self {
        self.factory(setup.factory)
            .saves(setup.saves)
            .background(setup.background)
    }

    pub fn factory(mut self, factory: SessionFactory) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn saves(mut self, saves: SaveService) -> Self {
        self.saves = Some(saves);
        self
    }

    /// Menu background; the built-in art is used when unset.
    pub fn background(mut self, background: MenuBackground) -> Self {
        self.background = Some(background);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let factory = self
            .factory
            .context("Session factory is required. Use .setup() or .factory() to set it.")?;
        let saves = self
            .saves
            .context("Save service is required. Use .setup() or .saves() to set it.")?;
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            factory,
            saves,
            background: self.background.unwrap_or_else(MenuBackground::builtin),
            frontend,
        })
    }
}
