//! Input events for the browser
//!
//! The run loop consumes exactly one event per cycle from an [`EventSource`].
//! The crossterm-backed source is the production implementation; tests drive
//! the session with scripted keys instead, so the serialization guarantees of
//! the render/input cycle hold independent of the terminal library.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// A single input event, reduced to what the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Tab,
    Esc,
    Backspace,
    Char(char),
    CtrlC,
    /// Terminal resize; handled as a plain re-render
    Resize,
}

/// Blocking source of input events
pub trait EventSource {
    /// Block until the next event arrives
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying input fails.
    fn next(&mut self) -> io::Result<Key>;
}

/// Production event source backed by crossterm
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(mapped) = map_key(&key) {
                        return Ok(mapped);
                    }
                }
                Event::Resize(_, _) => return Ok(Key::Resize),
                _ => {}
            }
        }
    }
}

/// Map a crossterm key event to a session key
#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Key::CtrlC),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_plain_keys() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Enter)
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE)),
            Some(Key::Char('p'))
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(Key::Up)
        );
    }

    #[test]
    fn test_map_ctrl_c() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::CtrlC)
        );
    }

    #[test]
    fn test_other_ctrl_chords_are_ignored() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_shifted_char_passes_through() {
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Key::Char('A'))
        );
    }
}
