//! Input subsystem.
//!
//! Translates terminal events into the logical keys understood by the keyboard sensor
//! and into the window-level events that cancel a drag.

pub mod keys;
pub mod raw;

// Modules outside this crate should prefer importing from `crate::input` rather than
// reaching into submodules.
pub use keys::{is_key_down, DragKey};
pub use raw::{spawn_input_thread, HostEvent, RawInputCollector};
