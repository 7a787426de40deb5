#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use client_bootstrap::{MenuBackground, SessionFactory};
use client_frontend_core::{
    Console, EventSource, FrontendConfig, Handler, InputEvent, Key, KeyInput, MainLoop, MainMenu,
    Screen,
};
use game_content::EntityTemplates;
use game_core::{GenerationParams, Session};
use runtime::{InMemorySessionRepo, RepositoryError, SaveService, SaveSlots, SessionRepository};

pub const SEED: u64 = 2024;

/// Replays pre-recorded event batches, one per `wait`.
pub struct ScriptedEvents {
    batches: VecDeque<Result<Vec<InputEvent>>>,
}

impl ScriptedEvents {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into_iter().map(Ok).collect(),
        }
    }

    pub fn then_fail(mut self, message: &'static str) -> Self {
        self.batches.push_back(Err(anyhow!(message)));
        self
    }
}

#[async_trait]
impl EventSource for ScriptedEvents {
    async fn wait(&mut self) -> Result<Vec<InputEvent>> {
        self.batches
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("event script exhausted")))
    }
}

/// Keeps a copy of every presented frame.
#[derive(Clone, Default)]
pub struct RecordingScreen {
    frames: Arc<Mutex<Vec<Console>>>,
    fail_on_frame: Option<usize>,
    panic_on_frame: Option<usize>,
}

impl RecordingScreen {
    pub fn failing_on(frame: usize) -> Self {
        Self {
            fail_on_frame: Some(frame),
            ..Self::default()
        }
    }

    pub fn panicking_on(frame: usize) -> Self {
        Self {
            panic_on_frame: Some(frame),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<Console> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Console {
        self.frames().pop().expect("at least one frame presented")
    }
}

impl Screen for RecordingScreen {
    fn present(&mut self, console: &Console) -> Result<()> {
        let mut frames = self.frames.lock().unwrap();
        if self.fail_on_frame == Some(frames.len()) {
            return Err(anyhow!("terminal went away"));
        }
        if self.panic_on_frame == Some(frames.len()) {
            drop(frames);
            panic!("glyph atlas exhausted");
        }
        frames.push(console.clone());
        Ok(())
    }
}

/// Repository whose first `failures` saves fail with an I/O error.
pub struct FlakyRepo {
    inner: InMemorySessionRepo,
    failures: AtomicUsize,
}

impl FlakyRepo {
    pub fn new(failures: usize) -> Self {
        Self {
            inner: InMemorySessionRepo::new(),
            failures: AtomicUsize::new(failures),
        }
    }
}

impl SessionRepository for FlakyRepo {
    fn save(&self, slot: &str, session: &Session) -> runtime::Result<()> {
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save(slot, session)
    }

    fn load(&self, slot: &str) -> runtime::Result<Option<Session>> {
        self.inner.load(slot)
    }

    fn exists(&self, slot: &str) -> bool {
        self.inner.exists(slot)
    }
}

/// Repository that panics when asked to write the primary slot.
#[derive(Default)]
pub struct PanickingRepo {
    pub inner: InMemorySessionRepo,
}

impl SessionRepository for PanickingRepo {
    fn save(&self, slot: &str, session: &Session) -> runtime::Result<()> {
        if slot == SaveSlots::DEFAULT_PRIMARY {
            panic!("save slot {slot} is cursed");
        }
        self.inner.save(slot, session)
    }

    fn load(&self, slot: &str) -> runtime::Result<Option<Session>> {
        self.inner.load(slot)
    }

    fn exists(&self, slot: &str) -> bool {
        self.inner.exists(slot)
    }
}

pub fn factory() -> SessionFactory {
    SessionFactory::new(
        GenerationParams::default().with_seed(SEED),
        Arc::new(EntityTemplates::default()),
        64,
    )
}

pub fn saves(repo: Arc<dyn SessionRepository>) -> SaveService {
    SaveService::new(repo, SaveSlots::default())
}

pub fn main_menu(saves: &SaveService) -> Handler {
    Handler::MainMenu(MainMenu::new(factory(), saves.clone(), MenuBackground::default()))
}

pub fn main_loop(
    screen: RecordingScreen,
    events: ScriptedEvents,
    saves: &SaveService,
) -> MainLoop<RecordingScreen, ScriptedEvents> {
    MainLoop::new(screen, events, saves.clone(), &FrontendConfig::default())
}

pub fn key(ch: char) -> InputEvent {
    InputEvent::Key(KeyInput::char(ch))
}

pub fn esc() -> InputEvent {
    InputEvent::Key(KeyInput::new(Key::Esc))
}

pub fn ctrl(ch: char) -> InputEvent {
    InputEvent::Key(KeyInput::ctrl(ch))
}

/// All rows of the console joined with newlines.
pub fn screen_text(console: &Console) -> String {
    (0..console.height() as i32)
        .map(|y| console.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}
