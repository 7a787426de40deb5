//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, content assembly, session creation and the
//! save service setup that can be reused by CLI or other front-end crates.
pub mod background;
pub mod builder;
pub mod config;
pub mod content;
pub mod dirs;
pub mod session;

pub use background::MenuBackground;
pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{GenerationOverrides, MessageConfig, RuntimeConfig, SaveConfig};
pub use content::{BuiltinContent, ContentBundle, ContentSource, DataDirContent};
pub use session::{SessionError, SessionFactory, WELCOME_MESSAGE};
