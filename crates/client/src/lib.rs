//! Top-level client wiring the session factory, saves and a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ RuntimeSetup (session factory, save service, menu background)
//!   └─→ Frontend (UI layer, runs the main loop)
//! ```
//!
//! The client owns nothing the frontend could reach globally: the initial
//! [`Handler`] is a main menu built from the injected setup, and the save
//! service travels with it into the frontend.

mod builder;

pub use builder::ClientBuilder;

pub use client_frontend_core::{Frontend, Termination};

use anyhow::Result;
use client_bootstrap::{MenuBackground, SessionFactory};
use client_frontend_core::{Handler, MainMenu};
use runtime::SaveService;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the setup and the frontend
/// 2. `Client::run()` builds the main menu and hands control to the frontend
/// 3. The frontend returns how the loop ended
pub struct Client {
    factory: SessionFactory,
    saves: SaveService,
    background: MenuBackground,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend from the main menu until the loop terminates.
    ///
    /// # Errors
    ///
    /// Only frontend setup or teardown failures are returned as `Err`; how
    /// the game itself ended is the returned [`Termination`].
    pub async fn run(self) -> Result<Termination> {
        let Self {
            factory,
            saves,
            background,
            mut frontend,
        } = self;

        let menu = MainMenu::new(factory, saves.clone(), background);
        let termination = frontend.run(Handler::MainMenu(menu), saves).await?;

        match &termination {
            Termination::Crashed(err) => tracing::error!("client crashed: {err:#}"),
            other => tracing::info!(?other, "client finished"),
        }
        Ok(termination)
    }
}
