//! Per-event context supplied by the caller and the sensor's answer about the event.

/// Primary movement axis of the current drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = crate::error::KbDragError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Axis::Vertical),
            "horizontal" | "h" => Ok(Axis::Horizontal),
            other => Err(crate::error::KbDragError::invalid_argument(format!(
                "unknown axis '{other}' (expected vertical or horizontal)"
            ))),
        }
    }
}

/// What the caller knows at the time of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorContext {
    /// Whether a lift may begin right now. Only consulted while idle.
    pub can_lift: bool,
    /// Axis of the active drag. `None` is only legal while idle.
    pub axis: Option<Axis>,
}

impl SensorContext {
    pub fn new(can_lift: bool, axis: Option<Axis>) -> Self {
        Self { can_lift, axis }
    }
}

/// Whether the host must skip its own handling of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The sensor consumed the key; default handling must not run.
    Suppressed,
    /// The sensor ignored the key; the host handles it as usual.
    PassThrough,
}

impl KeyDisposition {
    pub fn is_suppressed(self) -> bool {
        self == KeyDisposition::Suppressed
    }
}
