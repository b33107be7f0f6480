//! Scheduler configuration: adjacency threshold and slot palette.
//!
//! Fixed when a [`Scheduler`](crate::Scheduler) is built; there is no
//! runtime mutation.

use serde::{Deserialize, Serialize};

use crate::graph::DEFAULT_THRESHOLD;
use crate::model::Palette;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Nodes strictly closer than this are adjacent.
    pub threshold_distance: f64,

    /// Ordered slot colors. Order is both the greedy tie-break and the
    /// order of time offsets.
    pub palette: Palette,
}

impl SchedulerConfig {
    pub fn new(threshold_distance: f64, palette: Palette) -> Self {
        Self { threshold_distance, palette }
    }

    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold_distance.is_finite() || self.threshold_distance <= 0.0 {
            return Err(Error::Config(format!(
                "threshold_distance must be positive and finite, got {}",
                self.threshold_distance
            )));
        }
        if self.palette.is_empty() {
            return Err(Error::Config("palette must contain at least one color".into()));
        }
        if let Some(dup) = self.palette.first_duplicate() {
            return Err(Error::Config(format!("duplicate palette color '{dup}'")));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            threshold_distance: DEFAULT_THRESHOLD,
            palette: Palette::default(),
        }
    }
}
