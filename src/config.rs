//! Simulation settings loaded from JSON.

use crate::driver::CycleLimit;
use crate::intersection::{
    ConfigError, Intersection, IntersectionBuilder, DEFAULT_AXIS_A, DEFAULT_AXIS_B,
    DEFAULT_GREEN_SECS, DEFAULT_YELLOW_SECS,
};
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CYCLES: u64 = 3;

/// Errors reading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything needed to start a simulation.
///
/// Missing fields take their defaults; `"cycles": null` runs until stopped.
///
/// ```json
/// { "axis_a": "Main St", "green_secs": 20, "cycles": null }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub axis_a: String,
    pub axis_b: String,
    pub green_secs: i64,
    pub yellow_secs: i64,
    pub cycles: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            axis_a: DEFAULT_AXIS_A.to_string(),
            axis_b: DEFAULT_AXIS_B.to_string(),
            green_secs: DEFAULT_GREEN_SECS,
            yellow_secs: DEFAULT_YELLOW_SECS,
            cycles: Some(DEFAULT_CYCLES),
        }
    }
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn cycle_limit(&self) -> CycleLimit {
        self.cycles
            .map_or(CycleLimit::Unbounded, CycleLimit::Bounded)
    }

    /// Validate timings and build the intersection.
    pub fn intersection(&self) -> Result<Intersection, ConfigError> {
        IntersectionBuilder::new()
            .axes(self.axis_a.as_str(), self.axis_b.as_str())
            .green(seconds(self.green_secs))
            .yellow(seconds(self.yellow_secs))
            .build()
    }
}

// Out-of-range values collapse to zero so validation rejects them.
fn seconds(secs: i64) -> TimeDelta {
    TimeDelta::try_seconds(secs).unwrap_or_else(TimeDelta::zero)
}
