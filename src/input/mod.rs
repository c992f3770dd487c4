//! Terminal input: a thin layer over `crossterm::event` so the runner deals
//! in a small `InputEvent` enum.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event, KeyEventKind, MouseEvent};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Windows reports key releases too; only presses drive the UI.
            Event::Key(k) if k.kind != KeyEventKind::Release => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Call after `poll` returned true to avoid blocking.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
