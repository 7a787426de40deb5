//! Input processing for the CLI client.
//!
//! This module owns the crossterm-to-[`InputEvent`] mapping so the handlers
//! can remain agnostic about the specifics of `crossterm` events.

mod source;

pub use source::CrosstermEvents;

use client_frontend_core::{InputEvent, Key, KeyInput, KeyModifiers};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Converts a raw terminal event. Key releases and mouse/focus events are
/// dropped.
pub fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = translate_modifiers(key.modifiers);

    // Raw mode swallows SIGINT; treat Ctrl+C as the interrupt it would have been.
    if modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C')) {
        return Some(InputEvent::Interrupt);
    }

    let code = match key.code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => Key::Other,
    };

    Some(InputEvent::Key(KeyInput::with_modifiers(code, modifiers)))
}

fn translate_modifiers(raw: event::KeyModifiers) -> KeyModifiers {
    let mut modifiers = KeyModifiers::empty();
    modifiers.set(KeyModifiers::SHIFT, raw.contains(event::KeyModifiers::SHIFT));
    modifiers.set(KeyModifiers::CONTROL, raw.contains(event::KeyModifiers::CONTROL));
    modifiers.set(KeyModifiers::ALT, raw.contains(event::KeyModifiers::ALT));
    modifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers as RawModifiers};

    fn key(code: KeyCode, modifiers: RawModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_char_keys_pass_through() {
        assert_eq!(
            translate_event(key(KeyCode::Char('n'), RawModifiers::NONE)),
            Some(InputEvent::Key(KeyInput::char('n')))
        );
    }

    #[test]
    fn test_ctrl_c_is_an_interrupt() {
        assert_eq!(
            translate_event(key(KeyCode::Char('c'), RawModifiers::CONTROL)),
            Some(InputEvent::Interrupt)
        );
    }

    #[test]
    fn test_ctrl_s_keeps_modifier() {
        assert_eq!(
            translate_event(key(KeyCode::Char('s'), RawModifiers::CONTROL)),
            Some(InputEvent::Key(KeyInput::ctrl('s')))
        );
    }

    #[test]
    fn test_releases_and_resizes() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: RawModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate_event(release), None);
        assert_eq!(
            translate_event(Event::Resize(100, 40)),
            Some(InputEvent::Resize {
                width: 100,
                height: 40
            })
        );
        assert_eq!(translate_event(Event::FocusGained), None);
    }
}
