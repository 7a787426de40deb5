//! The render/input loop and its save-on-termination sequencing.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use game_core::color;
use runtime::SaveService;

use crate::config::FrontendConfig;
use crate::console::{Console, Screen};
use crate::event::{EventSource, InputEvent};
use crate::handler::{Handler, HandlerError};

/// How the main loop ended.
#[derive(Debug)]
pub enum Termination {
    /// The player quit from the menu; nothing was saved.
    QuitWithoutSaving,
    /// Normal exit; the active session (if any) was written to the primary slot.
    Exit,
    /// Unexpected termination; the active session (if any) was written to
    /// the fallback slot. Carries the cause.
    Crashed(anyhow::Error),
}

impl Termination {
    pub fn is_crash(&self) -> bool {
        matches!(self, Self::Crashed(_))
    }
}

pub struct MainLoop<S, E> {
    screen: S,
    events: E,
    saves: SaveService,
    console: Console,
}

impl<S, E> MainLoop<S, E>
where
    S: Screen,
    E: EventSource,
{
    pub fn new(screen: S, events: E, saves: SaveService, config: &FrontendConfig) -> Self {
        Self {
            screen,
            events,
            saves,
            console: Console::new(config.console_width, config.console_height),
        }
    }

    /// Runs until the handler quits, exits, or something goes wrong.
    ///
    /// Every termination except [`Termination::QuitWithoutSaving`] attempts
    /// one save of the active session. A failed save is logged and never
    /// replaces the termination cause.
    pub async fn run(mut self, mut handler: Handler) -> Termination {
        tracing::info!(handler = handler.name(), "main loop started");

        loop {
            let frame = panic::catch_unwind(AssertUnwindSafe(|| {
                self.console.clear();
                handler.render(&mut self.console);
                self.screen.present(&self.console)
            }));
            match frame {
                Ok(Ok(())) => {}
                Ok(Err(err)) => return self.crash(&handler, err.context("presenting console")),
                Err(payload) => return self.panicked(&mut handler, payload.as_ref(), "rendering"),
            }

            let events = match self.events.wait().await {
                Ok(events) => events,
                Err(err) => return self.crash(&handler, err.context("waiting for input")),
            };

            for event in events {
                if event == InputEvent::Interrupt {
                    return self.crash(&handler, anyhow!("interrupted"));
                }

                let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.dispatch(event)));
                match outcome {
                    Ok(Ok(None)) => {}
                    Ok(Ok(Some(next))) => {
                        tracing::debug!(from = handler.name(), to = next.name(), "handler transition");
                        handler = next;
                    }
                    Ok(Err(HandlerError::QuitWithoutSaving)) => {
                        tracing::info!("quit without saving");
                        return Termination::QuitWithoutSaving;
                    }
                    Ok(Err(HandlerError::Exit)) => {
                        if let Some(session) = handler.session() {
                            if let Err(err) = self.saves.save_primary(session) {
                                tracing::error!(error = %err, "failed to save on exit");
                            }
                        }
                        tracing::info!("exit");
                        return Termination::Exit;
                    }
                    Ok(Err(HandlerError::Failed(err))) => {
                        tracing::error!(error = ?err, handler = handler.name(), "dispatch failed");
                        if let Some(session) = handler.session_mut() {
                            session.log.add_message(format!("{err:#}"), color::ERROR);
                        }
                        // Drop the rest of this batch.
                        break;
                    }
                    Err(payload) => {
                        return self.panicked(&mut handler, payload.as_ref(), "dispatch");
                    }
                }
            }
        }
    }

    /// Records the panic text in the session log, then crashes.
    fn panicked(
        &self,
        handler: &mut Handler,
        payload: &(dyn Any + Send),
        stage: &str,
    ) -> Termination {
        let text = panic_message(payload);
        if let Some(session) = handler.session_mut() {
            session.log.add_message(format!("Panic: {text}"), color::ERROR);
        }
        self.crash(handler, anyhow!("{stage} panicked: {text}"))
    }

    fn crash(&self, handler: &Handler, cause: anyhow::Error) -> Termination {
        tracing::error!(error = ?cause, "unexpected termination");
        if let Some(session) = handler.session() {
            if let Err(err) = self.saves.save_fallback(session) {
                tracing::error!(error = %err, "failed to write fallback save");
            }
        }
        Termination::Crashed(cause)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_owned()
    }
}
