//! Low-level input collection: crossterm polling and translation into the host events
//! a drag board consumes.
//!
//! Terminal resizes and mouse wheel ticks are the terminal's equivalent of a window
//! `resize` / `scroll`, so they surface as [`WindowEvent`]s.

use crate::error::Result;
use crate::sensor::WindowEvent;
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Events surfaced to the host loop.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Key(KeyEvent),
    Window(WindowEvent),
}

/// Collector that polls crossterm and translates what it reads.
#[derive(Debug, Default)]
pub struct RawInputCollector;

impl RawInputCollector {
    pub fn new() -> Self {
        Self
    }

    /// Translate a single crossterm event. Events with no drag meaning yield `None`.
    pub fn translate(&self, event: Event) -> Option<HostEvent> {
        match event {
            Event::Key(key_event) => Some(HostEvent::Key(key_event)),
            Event::Resize(_, _) => Some(HostEvent::Window(WindowEvent::Resize)),
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown
                | MouseEventKind::ScrollLeft
                | MouseEventKind::ScrollRight => Some(HostEvent::Window(WindowEvent::Scroll)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Retrieve the next host event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<HostEvent>> {
        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        Ok(self.translate(event))
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards them to the
/// board loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<HostEvent>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut collector = RawInputCollector::new();
        while !shutdown.load(Ordering::SeqCst) {
            match collector.poll_event(Some(poll_interval)) {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                Ok(None) => continue,
                Err(err) => {
                    log::error!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
