//! Dungeon game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Session factory, saves and menu assets via `RuntimeBuilder`
//! 2. Frontend (UI), currently the terminal frontend
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)

use anyhow::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{RuntimeBuilder, RuntimeConfig};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dungeon_client::{Client, Termination};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging; the guard flushes the file writer on drop
    let _log_guard = logging::setup_logging(&cli_config.log_dir)?;

    tracing::info!("Starting Dungeon client");
    tracing::info!(save_dir = %runtime_config.saves.dir.display(), "Saves");

    // 3. Build session factory and saves
    let setup = RuntimeBuilder::new(runtime_config).build()?;

    // 4. Build Frontend
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder().setup(setup).frontend(frontend).build()?;
    let termination = client.run().await?;

    tracing::info!("Client shutdown complete");
    match termination {
        Termination::Crashed(err) => Err(err.context("the game terminated unexpectedly")),
        Termination::QuitWithoutSaving | Termination::Exit => Ok(()),
    }
}
