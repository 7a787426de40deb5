//! Backend-neutral input events and the source the main loop waits on.
use anyhow::Result;
use async_trait::async_trait;
use bitflags::bitflags;

/// Keys the handlers understand. Anything else arrives as [`Key::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Other,
}

bitflags! {
    /// Modifier keys held while a key was pressed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const SHIFT   = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT     = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub code: Key,
    pub modifiers: KeyModifiers,
}

impl KeyInput {
    pub const fn new(code: Key) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub const fn with_modifiers(code: Key, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }

    pub const fn ctrl(ch: char) -> Self {
        Self::with_modifiers(Key::Char(ch), KeyModifiers::CONTROL)
    }

    pub fn is_ctrl(&self, ch: char) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(self.code, Key::Char(c) if c.eq_ignore_ascii_case(&ch))
    }
}

/// A single input event, consumed once by the main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyInput),
    Resize { width: u16, height: u16 },
    /// External request to stop (Ctrl+C, SIGINT). Treated as an unexpected
    /// termination so the session gets a fallback save.
    Interrupt,
}

impl From<KeyInput> for InputEvent {
    fn from(key: KeyInput) -> Self {
        Self::Key(key)
    }
}

/// Blocking source of input events.
#[async_trait]
pub trait EventSource: Send {
    /// Waits until at least one event is available and returns all pending ones.
    async fn wait(&mut self) -> Result<Vec<InputEvent>>;
}
