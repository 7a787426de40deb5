//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontendConfig {
    pub console_width: u16,
    pub console_height: u16,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            console_width: Self::DEFAULT_WIDTH,
            console_height: Self::DEFAULT_HEIGHT,
        }
    }
}

impl FrontendConfig {
    pub const DEFAULT_WIDTH: u16 = 80;
    pub const DEFAULT_HEIGHT: u16 = 50;

    /// Smallest console the session layout fits in.
    pub const MIN_WIDTH: u16 = 62;
    pub const MIN_HEIGHT: u16 = 12;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONSOLE_WIDTH` - Console columns (default: 80)
    /// - `CONSOLE_HEIGHT` - Console rows (default: 50)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16, _>(&lookup, "CONSOLE_WIDTH") {
            config.console_width = width.max(Self::MIN_WIDTH);
        }
        if let Some(height) = read_env::<u16, _>(&lookup, "CONSOLE_HEIGHT") {
            config.console_height = height.max(Self::MIN_HEIGHT);
        }

        config
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
