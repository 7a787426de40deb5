//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::SaveService;

use crate::handler::Handler;
use crate::main_loop::Termination;

/// Frontend abstraction for UI layers.
///
/// A frontend owns the terminal or window, builds a [`MainLoop`](crate::MainLoop)
/// over its own screen and event source, and runs it from `handler`.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
///
/// # Errors
///
/// `Err` is reserved for failures setting up or restoring the UI itself.
/// Problems inside the loop are reported as [`Termination::Crashed`].
#[async_trait]
pub trait Frontend: Send {
    async fn run(&mut self, handler: Handler, saves: SaveService) -> Result<Termination>;
}
