pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use std::io;

use crossterm::event::{self, Event, KeyEventKind};

/// Terminal events the dispatcher cares about.
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Block until the next terminal event. This is the single yield point of
/// the whole application; nothing else suspends.
pub fn read_event() -> io::Result<InputEvent> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(InputEvent::Key(key)),
        Event::Resize(width, height) => Ok(InputEvent::Resize(width, height)),
        _ => Ok(InputEvent::Other),
    }
}
