//! Runtime settings
//!
//! Read from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Spawn RNG seed. Unset picks a fresh one each launch.
    pub seed: Option<u64>,
    /// Stop the simulation after this many ticks
    pub max_ticks: Option<u64>,
    /// Log a snapshot every N ticks at debug level (0 = never)
    pub snapshot_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            max_ticks: None,
            snapshot_every: 0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `path`, or defaults when absent or unreadable
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings file {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Tick interval, never zero
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}
