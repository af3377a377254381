//! Shared fixtures: a drag engine that records every callback.

#![allow(dead_code)]

use kbdrag::sensor::ListenerId;
use kbdrag::{
    Axis, DragCallbacks, FrameScheduler, KeyboardSensor, SensorContext, WindowEvent, WindowEvents,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Lift,
    Drop,
    Cancel,
    Forward,
    Backward,
    CrossForward,
    CrossBackward,
}

#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub calls: Vec<Call>,
}

impl RecordingEngine {
    pub fn count(&self, call: Call) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl DragCallbacks for RecordingEngine {
    fn on_key_lift(&mut self) {
        self.calls.push(Call::Lift);
    }
    fn on_drop(&mut self) {
        self.calls.push(Call::Drop);
    }
    fn on_cancel(&mut self) {
        self.calls.push(Call::Cancel);
    }
    fn move_forward(&mut self) {
        self.calls.push(Call::Forward);
    }
    fn move_backward(&mut self) {
        self.calls.push(Call::Backward);
    }
    fn cross_axis_move_forward(&mut self) {
        self.calls.push(Call::CrossForward);
    }
    fn cross_axis_move_backward(&mut self) {
        self.calls.push(Call::CrossBackward);
    }
}

pub type TestSensor = KeyboardSensor<RecordingEngine>;

/// Sensor whose scheduler flushes on every poll.
pub fn sensor_with(window: &Arc<WindowEvents>) -> TestSensor {
    KeyboardSensor::with_scheduler(
        RecordingEngine::default(),
        window.clone(),
        FrameScheduler::new(Duration::ZERO),
    )
}

pub fn setup() -> (TestSensor, Arc<WindowEvents>) {
    let window = Arc::new(WindowEvents::new());
    (sensor_with(&window), window)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn space() -> KeyEvent {
    key(KeyCode::Char(' '))
}

pub fn can_lift() -> SensorContext {
    SensorContext::new(true, None)
}

pub fn dragging(axis: Option<Axis>) -> SensorContext {
    SensorContext::new(false, axis)
}

/// Deliver a window event the way a host does: to every registered listener.
pub fn fire(window: &WindowEvents, sensor: &mut TestSensor, event: WindowEvent) {
    for listener in window.listeners(event) {
        if listener == sensor.listener_id() {
            sensor.on_window_event(event);
        }
    }
}

pub fn listeners_of(window: &WindowEvents, id: ListenerId) -> usize {
    [WindowEvent::Resize, WindowEvent::Scroll]
        .into_iter()
        .filter(|event| window.is_subscribed(*event, id))
        .count()
}
