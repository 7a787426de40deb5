//! Event source backed by crossterm polling.
use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{EventSource, InputEvent};
use crossterm::event;
use tokio::time::{self, Duration};

use super::translate_event;

/// Polls the terminal every frame interval and also listens for SIGINT.
pub struct CrosstermEvents {
    frame_interval: Duration,
}

impl CrosstermEvents {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            frame_interval: Duration::from_millis(frame_interval_ms),
        }
    }

    /// Reads everything already queued without blocking.
    fn drain(&self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::from_millis(0))? {
            if let Some(translated) = translate_event(event::read()?) {
                events.push(translated);
            }
        }
        Ok(events)
    }
}

#[async_trait]
impl EventSource for CrosstermEvents {
    async fn wait(&mut self) -> Result<Vec<InputEvent>> {
        loop {
            tokio::select! {
                signal = tokio::signal::ctrl_c() => {
                    signal?;
                    tracing::warn!("received interrupt signal");
                    return Ok(vec![InputEvent::Interrupt]);
                }
                _ = time::sleep(self.frame_interval) => {
                    let events = self.drain()?;
                    if !events.is_empty() {
                        return Ok(events);
                    }
                }
            }
        }
    }
}
