//! Terminal event pump for the dashboard.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events delivered to the main loop. The dashboard redraws after every
/// event, so resize, focus, and paste all collapse into a tick.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Redraw cadence, also emitted for non-key terminal events.
    Tick,
}

/// Polls crossterm in a background task and forwards events over a channel.
///
/// When the pump stops (terminal gone, receiver dropped) the channel
/// closes and [`EventHandler::next`] returns `None`.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Start the poll loop. `tick_rate` bounds how long an idle terminal
    /// waits before the next tick.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                        Ok(_) => Event::Tick,
                        Err(_) => break,
                    }
                } else {
                    Event::Tick
                };

                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Receive the next event. `None` means the pump has shut down.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Check if a key event matches a specific key code without modifiers.
pub fn is_key(event: &KeyEvent, code: KeyCode) -> bool {
    event.code == code && event.modifiers == KeyModifiers::NONE
}

/// Check if a key event carries Ctrl plus the given character.
pub fn is_ctrl(event: &KeyEvent, ch: char) -> bool {
    event.code == KeyCode::Char(ch) && event.modifiers == KeyModifiers::CONTROL
}

/// Check if a key event asks to quit. Plain letters stay available for
/// symbol entry, so quitting takes Esc or Ctrl+C.
pub fn is_quit(event: &KeyEvent) -> bool {
    is_key(event, KeyCode::Esc) || is_ctrl(event, 'c')
}
