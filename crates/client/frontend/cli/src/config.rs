//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory for `dungeon.log`.
    pub log_dir: PathBuf,
    /// Input polling interval in milliseconds.
    pub frame_interval_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_dir: client_bootstrap::dirs::log_dir(),
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl CliConfig {
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOG_DIR` - Directory for the log file (default: platform cache dir)
    /// - `FRAME_INTERVAL_MS` - Input polling interval (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        if let Some(interval) = read_env::<u64>("FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
