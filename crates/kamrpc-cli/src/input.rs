use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use kamrpc_core::ShutdownSignal;
use tracing::debug;

/// Spawn a thread that watches the terminal for quit keys (Esc, q, Q, and
/// Ctrl+C as a backup to the signal handler) and triggers shutdown.
pub fn spawn_keyboard_monitor(shutdown: Arc<ShutdownSignal>) -> JoinHandle<()> {
    thread::spawn(move || {
        debug!("Keyboard monitor started");

        while !shutdown.is_triggered() {
            // Short poll timeout so the thread notices shutdown from the
            // other paths too.
            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            match event::read() {
                Ok(Event::Key(key)) if is_quit_key(&key) => {
                    debug!("Quit key pressed: {:?}", key.code);
                    shutdown.trigger();
                    break;
                }
                _ => {}
            }
        }

        debug!("Keyboard monitor stopped");
    })
}

fn is_quit_key(event: &KeyEvent) -> bool {
    match event.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
