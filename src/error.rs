//! Error types and handling infrastructure for kbdrag.
//!
//! The sensor itself never surfaces errors to its caller: a protocol violation is
//! logged and turned into a cancellation. The error type still exists so the
//! internal dispatch path, the configuration loader and the terminal demo share a
//! single vocabulary.

use thiserror::Error;

/// The main error type for kbdrag operations.
#[derive(Error, Debug)]
pub enum KbDragError {
    /// A movement key arrived during a drag but the caller supplied no axis
    #[error("Protocol violation: cannot handle {key} while dragging without an axis")]
    ProtocolViolation { key: String },

    /// Configuration file could not be read or contained invalid values
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Terminal setup, polling or drawing failed
    #[error("Terminal operation failed: {message}")]
    TerminalError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for kbdrag operations.
pub type Result<T> = std::result::Result<T, KbDragError>;

impl KbDragError {
    /// Create a ProtocolViolation naming the offending key
    pub fn protocol_violation(key: impl Into<String>) -> Self {
        Self::ProtocolViolation { key: key.into() }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a TerminalError from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::TerminalError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Terminal I/O is the only io::Error producer in this crate
impl From<std::io::Error> for KbDragError {
    fn from(err: std::io::Error) -> Self {
        Self::TerminalError {
            message: "terminal I/O failed".to_string(),
            source: err,
        }
    }
}
