//! Keyboard input on a dedicated thread

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::state::AppEvent;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// True for the keys that end the session: q, Esc, Ctrl+C
pub fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Forward quit keys as [`AppEvent::Quit`] until the receiver goes away
pub fn spawn(events: mpsc::Sender<AppEvent>) -> JoinHandle<()> {
    thread::spawn(move || loop {
        if events.is_closed() {
            break;
        }
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                tracing::warn!("Input poll failed: {}", e);
                break;
            }
        }
        if let Ok(Event::Key(key)) = event::read() {
            if key.kind == KeyEventKind::Press && is_quit_key(key.code, key.modifiers) {
                let _ = events.blocking_send(AppEvent::Quit);
                break;
            }
        }
    })
}
