//! Glue code tying the main loop and the terminal together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, FrontendConfig, Handler, MainLoop, Termination};
use runtime::SaveService;

use crate::config::CliConfig;
use crate::input::CrosstermEvents;
use crate::presentation::{TerminalScreen, terminal};

pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handler: Handler, saves: SaveService) -> Result<Termination> {
        tracing::info!("CLI client starting...");

        let (mut terminal, guard) = terminal::init()?;

        let events = CrosstermEvents::new(self.cli_config.frame_interval_ms);
        let main_loop = MainLoop::new(
            TerminalScreen::new(&mut terminal),
            events,
            saves,
            &self.frontend_config,
        );
        let termination = main_loop.run(handler).await;

        guard.finish()?;
        tracing::info!(?termination, "CLI client exiting");

        Ok(termination)
    }
}
