// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

/// Terminal events the application cares about.
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Key releases and repeats are folded into
/// `Other` so handlers only ever see presses.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
