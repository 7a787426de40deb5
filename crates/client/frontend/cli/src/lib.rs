//! Terminal UI frontend for Dungeon game.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait on top of
//! ratatui and crossterm.
//!
//! # Architecture
//!
//! CliFrontend is a thin adapter that:
//! - Presents the shared [`Console`](client_frontend_core::Console) through ratatui
//! - Translates crossterm key events into backend-neutral input events
//! - Hands both to the shared main loop

mod app;
mod config;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::CliConfig;
pub use input::{CrosstermEvents, translate_event};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
