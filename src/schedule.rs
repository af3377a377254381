//! Movement scheduling.
//!
//! Arrow keys can arrive much faster than a display refreshes (a held key repeats).
//! The scheduler keeps at most one pending movement intent, later intents overwrite
//! earlier ones, and the pending intent is released at most once per frame.
//! Whoever polls the scheduler must re-check that the drag is still active before
//! acting on what it returns.

use crate::sensor::DragCallbacks;
use std::time::{Duration, Instant};

/// Default frame interval (~60Hz).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// A movement request destined for the drag engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveIntent {
    Forward,
    Backward,
    CrossAxisForward,
    CrossAxisBackward,
}

impl MoveIntent {
    /// Invoke the matching movement hook.
    pub fn dispatch<C: DragCallbacks + ?Sized>(self, callbacks: &mut C) {
        match self {
            MoveIntent::Forward => callbacks.move_forward(),
            MoveIntent::Backward => callbacks.move_backward(),
            MoveIntent::CrossAxisForward => callbacks.cross_axis_move_forward(),
            MoveIntent::CrossAxisBackward => callbacks.cross_axis_move_backward(),
        }
    }
}

/// Contract between the sensor and whatever batches its movement intents.
pub trait MoveScheduler {
    /// Record an intent, replacing any intent still pending.
    fn schedule(&mut self, intent: MoveIntent);

    /// Release the pending intent if a flush is due at `now`.
    fn poll(&mut self, now: Instant) -> Option<MoveIntent>;

    /// Forget the pending intent.
    fn clear(&mut self);

    fn is_pending(&self) -> bool;

    fn move_forward(&mut self) {
        self.schedule(MoveIntent::Forward);
    }

    fn move_backward(&mut self) {
        self.schedule(MoveIntent::Backward);
    }

    fn cross_axis_move_forward(&mut self) {
        self.schedule(MoveIntent::CrossAxisForward);
    }

    fn cross_axis_move_backward(&mut self) {
        self.schedule(MoveIntent::CrossAxisBackward);
    }
}

/// Frame-paced, last-intent-wins scheduler.
///
/// A poll that lands up to `tolerance` early still counts as the next frame, so a
/// driver ticking at the frame rate does not lose a whole frame to timer jitter.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    frame_interval: Duration,
    tolerance: Duration,
    pending: Option<MoveIntent>,
    last_flush: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            tolerance: Duration::ZERO,
            pending: None,
            last_flush: None,
        }
    }

    pub fn with_default_interval() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS))
    }

    /// Accept polls arriving up to `tolerance` before the frame boundary. Capped at
    /// half a frame so flushes stay paced.
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance.min(self.frame_interval / 2);
        self
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn tolerance(&self) -> Duration {
        self.tolerance
    }

    fn frame_due(&self, now: Instant) -> bool {
        match self.last_flush {
            None => true,
            Some(last) => {
                now.saturating_duration_since(last) + self.tolerance >= self.frame_interval
            }
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::with_default_interval()
    }
}

impl MoveScheduler for FrameScheduler {
    fn schedule(&mut self, intent: MoveIntent) {
        self.pending = Some(intent);
    }

    fn poll(&mut self, now: Instant) -> Option<MoveIntent> {
        if self.pending.is_none() || !self.frame_due(now) {
            return None;
        }
        self.last_flush = Some(now);
        self.pending.take()
    }

    fn clear(&mut self) {
        self.pending = None;
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
