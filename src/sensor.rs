//! Keyboard drag sensor.
//!
//! The sensor is a two-state machine (`Idle`, `Dragging`) that turns key presses into
//! drag lifecycle calls on a host-supplied [`DragCallbacks`] implementation. While a
//! drag is active it also listens for window `resize` / `scroll` so a viewport change
//! cancels the drag.
//!
//! ```text
//! Idle -> Dragging      (Space, lifting permitted)
//! Dragging -> Idle      (Space drops, Escape cancels, resize/scroll cancels,
//!                        arrow key without an axis cancels, kill() resets silently)
//! ```

pub mod callbacks;
pub mod context;
pub mod keyboard;
pub mod window;

pub use callbacks::DragCallbacks;
pub use context::{Axis, KeyDisposition, SensorContext};
pub use keyboard::{movement_intent, KeyboardSensor};
pub use window::{
    BindingAction, EventSource, ListenerId, WindowEvent, WindowEventBinder, WindowEvents,
    WINDOW_BINDINGS,
};
