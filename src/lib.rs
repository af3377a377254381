//! # kbdrag - Keyboard Sensor for Accessible Drag and Drop
//!
//! Turns discrete key presses into drag lifecycle commands (lift, move along the
//! primary axis, move across it, drop, cancel) so items can be dragged without a
//! pointer.
//!
//! ## Architecture
//!
//! - [`sensor`] - The keyboard sensor state machine, its callbacks contract and the
//!   window listeners that cancel a drag
//! - [`schedule`] - Frame-paced coalescing of movement intents
//! - [`input`] - Key role mapping and terminal event collection
//! - [`config`] - Sensor and demo settings
//! - [`app`] / [`render`] - The terminal demo board
//! - [`error`] - Centralized error types

// Core modules
pub mod error;
pub mod schedule;
pub mod sensor;

// Host plumbing
pub mod config;
pub mod input;

// Demo board
pub mod app;
pub mod render;

// Re-export commonly used types for convenience
pub use error::{KbDragError, Result};

// Public API surface for external usage
pub use config::{DemoConfig, SensorConfig};
pub use schedule::{FrameScheduler, MoveIntent, MoveScheduler};
pub use sensor::{
    Axis, DragCallbacks, EventSource, KeyDisposition, KeyboardSensor, SensorContext, WindowEvent,
    WindowEvents,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
