//! Configuration for the sensor and the demo board.
//!
//! Defaults are always available. With the `config` feature enabled, values can also
//! be read from a TOML file; command-line flags are applied on top by the binary.

use crate::error::{KbDragError, Result};
use crate::schedule::DEFAULT_FRAME_INTERVAL_MS;
use crate::sensor::Axis;
use std::time::Duration;

/// Sensor tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct SensorConfig {
    /// Minimum time between two movement flushes.
    pub frame_interval_ms: u64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl SensorConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frame_interval_ms == 0 {
            return Err(KbDragError::config("frame_interval_ms must be positive"));
        }
        Ok(())
    }
}

/// Settings for the `kbdrag` demo board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct DemoConfig {
    /// Number of lists on the board
    pub lists: usize,
    /// Items initially placed in each list
    pub items_per_list: usize,
    /// Axis items are laid out along inside a list
    pub axis: Axis,
    /// Redraw / flush cadence of the board loop
    pub tick_ms: u64,
    pub sensor: SensorConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lists: 3,
            items_per_list: 5,
            axis: Axis::Vertical,
            tick_ms: DEFAULT_FRAME_INTERVAL_MS,
            sensor: SensorConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Reject values the board cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.lists == 0 {
            return Err(KbDragError::config("lists must be at least 1"));
        }
        if self.items_per_list == 0 {
            return Err(KbDragError::config("items_per_list must be at least 1"));
        }
        if self.tick_ms == 0 {
            return Err(KbDragError::config("tick_ms must be positive"));
        }
        self.sensor.validate()
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(feature = "config")]
impl DemoConfig {
    /// `<config_dir>/kbdrag/config.toml`, when the platform has a config directory.
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kbdrag").join("config.toml"))
    }

    /// Read and validate a TOML configuration file.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            KbDragError::config(format!("cannot read {}: {}", path.display(), err))
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|err| KbDragError::config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
