// ABOUTME: Update step of the kiosk TUI — applies one message to the state.
// ABOUTME: Every terminal event or tick becomes a Msg; the app redraws after each update.

use std::time::Instant;

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::outreach::ContactSink;
use crate::tui::input::{InputResult, handle_key, handle_mouse};
use crate::tui::state::KioskState;

/// Messages that drive the update cycle.
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Paste(String),
    Resize,
    Tick(Instant),
}

impl Msg {
    /// Map a terminal event to a message. Key releases and focus changes are dropped.
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Msg::Key(key)),
            Event::Mouse(mouse) => Some(Msg::Mouse(mouse)),
            Event::Paste(text) => Some(Msg::Paste(text)),
            Event::Resize(_, _) => Some(Msg::Resize),
            _ => None,
        }
    }
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply `msg` to `state`. Contact submissions are logged through `sink`.
pub fn update(state: &mut KioskState, msg: Msg, sink: &mut dyn ContactSink) -> Flow {
    match msg {
        Msg::Key(key) => match handle_key(state, key) {
            InputResult::Quit => return Flow::Quit,
            InputResult::Submit => {
                // The outcome is kept in the form state and drawn by the form widget.
                let _ = state.submit_contact(sink);
            }
            InputResult::None => {}
        },
        Msg::Mouse(mouse) => handle_mouse(state, mouse),
        Msg::Paste(text) => state.paste(&text),
        Msg::Resize => {}
        Msg::Tick(now) => state.expire_flash(now),
    }
    Flow::Continue
}
