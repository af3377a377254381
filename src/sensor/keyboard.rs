//! The keyboard sensor state machine.

use crate::config::SensorConfig;
use crate::error::{KbDragError, Result};
use crate::input::{is_key_down, DragKey};
use crate::schedule::{FrameScheduler, MoveIntent, MoveScheduler};
use crate::sensor::callbacks::DragCallbacks;
use crate::sensor::context::{Axis, KeyDisposition, SensorContext};
use crate::sensor::window::{
    binding_for, BindingAction, EventSource, ListenerId, WindowEvent, WindowEventBinder,
};
use ratatui::crossterm::event::KeyEvent;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DragState {
    is_dragging: bool,
}

/// Map an arrow key to the intent it produces on `axis`.
///
/// Arrows along the axis move within the current list; the perpendicular arrows move
/// across lists.
pub fn movement_intent(axis: Axis, key: DragKey) -> Option<MoveIntent> {
    let intent = match (axis, key) {
        (Axis::Vertical, DragKey::ArrowDown) => MoveIntent::Forward,
        (Axis::Vertical, DragKey::ArrowUp) => MoveIntent::Backward,
        (Axis::Vertical, DragKey::ArrowRight) => MoveIntent::CrossAxisForward,
        (Axis::Vertical, DragKey::ArrowLeft) => MoveIntent::CrossAxisBackward,
        (Axis::Horizontal, DragKey::ArrowRight) => MoveIntent::Forward,
        (Axis::Horizontal, DragKey::ArrowLeft) => MoveIntent::Backward,
        (Axis::Horizontal, DragKey::ArrowDown) => MoveIntent::CrossAxisForward,
        (Axis::Horizontal, DragKey::ArrowUp) => MoveIntent::CrossAxisBackward,
        _ => return None,
    };
    Some(intent)
}

/// Keyboard-driven drag sensor.
///
/// Each instance owns its drag state; any number of sensors can share one
/// [`EventSource`]. A lift commits immediately, so there is no armed-but-pending phase
/// and [`is_capturing`](Self::is_capturing) always equals
/// [`is_dragging`](Self::is_dragging).
pub struct KeyboardSensor<C: DragCallbacks, S: MoveScheduler = FrameScheduler> {
    state: DragState,
    callbacks: C,
    scheduler: S,
    window: WindowEventBinder,
    listeners_bound: bool,
}

impl<C: DragCallbacks> KeyboardSensor<C> {
    /// Build a sensor with the default frame scheduler.
    pub fn new(callbacks: C, source: Arc<dyn EventSource>) -> Self {
        Self::with_scheduler(callbacks, source, FrameScheduler::default())
    }

    /// Build a sensor for a host that flushes every `tick`. Ticks arriving up to half
    /// a tick early still flush.
    pub fn from_config(
        callbacks: C,
        source: Arc<dyn EventSource>,
        config: &SensorConfig,
        tick: Duration,
    ) -> Self {
        let scheduler = FrameScheduler::new(config.frame_interval()).with_tolerance(tick / 2);
        Self::with_scheduler(callbacks, source, scheduler)
    }
}

impl<C: DragCallbacks, S: MoveScheduler> KeyboardSensor<C, S> {
    pub fn with_scheduler(callbacks: C, source: Arc<dyn EventSource>, scheduler: S) -> Self {
        Self {
            state: DragState::default(),
            callbacks,
            scheduler,
            window: WindowEventBinder::new(source),
            listeners_bound: false,
        }
    }

    /// Process one key-down against the current state.
    ///
    /// Never fails: a protocol violation is logged and handled as a cancel.
    pub fn on_key_down(&mut self, event: &KeyEvent, context: SensorContext) -> KeyDisposition {
        if !is_key_down(event) {
            return KeyDisposition::PassThrough;
        }
        let key = DragKey::from_key_event(event);

        if !self.is_dragging() {
            if !context.can_lift || key != Some(DragKey::Space) {
                return KeyDisposition::PassThrough;
            }
            self.start_dragging();
            self.callbacks.on_key_lift();
            return KeyDisposition::Suppressed;
        }

        match key {
            Some(DragKey::Escape) => self.cancel(),
            // Space again drops; suppressing it keeps a parent from reading it as a lift.
            Some(DragKey::Space) => {
                self.stop_dragging();
                self.callbacks.on_drop();
            }
            Some(key) if key.is_movement() => {
                if let Err(err) = self.schedule_move(key, context.axis) {
                    log::error!("{}", err);
                    self.cancel();
                }
            }
            // Drag is modal: keys with no role are swallowed too.
            _ => log::trace!("suppressing {:?} during drag", event.code),
        }
        KeyDisposition::Suppressed
    }

    /// Handle a window event delivered to this sensor's listener.
    ///
    /// Ignored unless the listeners are currently bound, so a late delivery after
    /// the drag ended has no effect.
    pub fn on_window_event(&mut self, event: WindowEvent) {
        if !self.listeners_bound {
            return;
        }
        match binding_for(event) {
            Some(BindingAction::Cancel) => {
                log::debug!("window {} during drag, cancelling", event);
                self.cancel();
            }
            None => {}
        }
    }

    /// Release a scheduled movement if one is due, dispatching it only while the drag
    /// is still active. Returns the intent that reached the drag engine.
    pub fn flush_frame(&mut self, now: Instant) -> Option<MoveIntent> {
        let intent = self.scheduler.poll(now)?;
        if !self.is_dragging() {
            log::debug!("discarding {:?}, drag no longer active", intent);
            return None;
        }
        intent.dispatch(&mut self.callbacks);
        Some(intent)
    }

    /// Return to idle without notifying the drag engine. Safe to call in any state.
    pub fn kill(&mut self) {
        self.stop_dragging();
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// Same as [`is_dragging`](Self::is_dragging): a keyboard drag starts instantly.
    pub fn is_capturing(&self) -> bool {
        self.is_dragging()
    }

    /// Identity under which this sensor registers window listeners.
    pub fn listener_id(&self) -> ListenerId {
        self.window.listener()
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule_move(&mut self, key: DragKey, axis: Option<Axis>) -> Result<()> {
        let axis = axis.ok_or_else(|| KbDragError::protocol_violation(key.name()))?;
        if let Some(intent) = movement_intent(axis, key) {
            self.scheduler.schedule(intent);
        }
        Ok(())
    }

    fn start_dragging(&mut self) {
        self.state = DragState { is_dragging: true };
        self.bind_window_events();
        log::debug!("drag started (listener {})", self.listener_id().as_u64());
    }

    fn stop_dragging(&mut self) {
        self.unbind_window_events();
        if self.state.is_dragging {
            log::debug!("drag ended (listener {})", self.listener_id().as_u64());
        }
        self.state = DragState { is_dragging: false };
        self.scheduler.clear();
    }

    fn cancel(&mut self) {
        self.stop_dragging();
        self.callbacks.on_cancel();
    }

    fn bind_window_events(&mut self) {
        if !self.listeners_bound {
            self.window.bind();
            self.listeners_bound = true;
        }
    }

    fn unbind_window_events(&mut self) {
        if self.listeners_bound {
            self.window.unbind();
            self.listeners_bound = false;
        }
    }
}

impl<C: DragCallbacks, S: MoveScheduler> Drop for KeyboardSensor<C, S> {
    fn drop(&mut self) {
        self.unbind_window_events();
    }
}
