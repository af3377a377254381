//! Window-level listeners that cancel a keyboard drag.
//!
//! A sensor only listens to the window while it is dragging. Registration goes through
//! the [`EventSource`] capability so the sensor never touches a global registry
//! directly; [`WindowEvents`] is the in-memory registry hosts share between sensors.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Window events a dragging sensor listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    Resize,
    Scroll,
}

impl WindowEvent {
    pub fn name(self) -> &'static str {
        match self {
            WindowEvent::Resize => "resize",
            WindowEvent::Scroll => "scroll",
        }
    }
}

impl fmt::Display for WindowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a sensor does when a bound window event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingAction {
    Cancel,
}

/// The binding table. Scroll-follow is not supported with a keyboard drag, so a
/// scroll cancels just like a resize.
pub const WINDOW_BINDINGS: [(WindowEvent, BindingAction); 2] = [
    (WindowEvent::Resize, BindingAction::Cancel),
    (WindowEvent::Scroll, BindingAction::Cancel),
];

/// Look up the action bound to `event`.
pub fn binding_for(event: WindowEvent) -> Option<BindingAction> {
    WINDOW_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == event)
        .map(|(_, action)| *action)
}

/// Identity of a listener installed in an [`EventSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

impl ListenerId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Capability to register window listeners.
///
/// Subscribing the same `(event, listener)` pair twice must not create a second
/// registration, and unsubscribing a pair that is not registered is a no-op.
pub trait EventSource {
    fn subscribe(&self, event: WindowEvent, listener: ListenerId);

    fn unsubscribe(&self, event: WindowEvent, listener: ListenerId);
}

/// In-memory window listener registry.
#[derive(Debug, Default)]
pub struct WindowEvents {
    listeners: Mutex<HashMap<WindowEvent, Vec<ListenerId>>>,
}

impl WindowEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners for `event` in registration order. Returns a snapshot so callers can
    /// dispatch while listeners unsubscribe themselves.
    pub fn listeners(&self, event: WindowEvent) -> Vec<ListenerId> {
        self.listeners
            .lock()
            .get(&event)
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of registrations across all events.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().values().map(Vec::len).sum()
    }

    pub fn is_subscribed(&self, event: WindowEvent, listener: ListenerId) -> bool {
        self.listeners
            .lock()
            .get(&event)
            .map_or(false, |ids| ids.contains(&listener))
    }
}

impl EventSource for WindowEvents {
    fn subscribe(&self, event: WindowEvent, listener: ListenerId) {
        let mut listeners = self.listeners.lock();
        let ids = listeners.entry(event).or_default();
        if !ids.contains(&listener) {
            ids.push(listener);
        }
    }

    fn unsubscribe(&self, event: WindowEvent, listener: ListenerId) {
        let mut listeners = self.listeners.lock();
        if let Some(ids) = listeners.get_mut(&event) {
            ids.retain(|id| *id != listener);
            if ids.is_empty() {
                listeners.remove(&event);
            }
        }
    }
}

/// Attaches and detaches the whole binding table as one unit.
///
/// The binder does not remember whether it is bound; its owner does.
pub struct WindowEventBinder {
    listener: ListenerId,
    source: Arc<dyn EventSource>,
}

impl WindowEventBinder {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self {
            listener: ListenerId::next(),
            source,
        }
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    pub fn bind(&self) {
        for (event, _) in WINDOW_BINDINGS {
            self.source.subscribe(event, self.listener);
        }
    }

    pub fn unbind(&self) {
        for (event, _) in WINDOW_BINDINGS {
            self.source.unsubscribe(event, self.listener);
        }
    }
}

impl fmt::Debug for WindowEventBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowEventBinder")
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}
