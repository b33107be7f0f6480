//! # Slot Scheduling
//!
//! Maps a coloring onto wall-clock windows. Slot `k` (0-based, palette
//! order) starts at `start + k * slot_minutes`; every colored node inherits
//! the start of its slot.
//!
//! Times of day are anchored on [`REFERENCE_DATE`], so a schedule that runs
//! past midnight continues into the next day instead of wrapping.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::graph::ProximityGraph;
use crate::model::*;
use crate::{Error, Result};

/// Date every scheduled start is anchored on.
pub const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

// ============================================================================
// Parameters
// ============================================================================

/// Validated schedule inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleParams {
    pub start: NaiveTime,
    pub slot_minutes: u32,
}

impl ScheduleParams {
    pub fn new(start: NaiveTime, slot_minutes: u32) -> Self {
        Self { start, slot_minutes }
    }

    /// Parse a `HH:MM` start time and a whole number of minutes.
    ///
    /// The duration may carry surrounding whitespace or a leading `+`;
    /// negative and fractional values are rejected.
    pub fn parse(start: &str, slot_minutes: &str) -> Result<Self> {
        let start_time = NaiveTime::parse_from_str(start, TIME_FORMAT).map_err(|e| {
            warn!(input = start, error = %e, "rejected start time");
            Error::InvalidStartTime { input: start.to_string() }
        })?;
        let minutes = slot_minutes.trim().parse::<u32>().map_err(|e| {
            warn!(input = slot_minutes, error = %e, "rejected slot duration");
            Error::InvalidDuration { input: slot_minutes.to_string() }
        })?;
        Ok(Self::new(start_time, minutes))
    }

    pub fn slot_duration(&self) -> Duration {
        Duration::minutes(i64::from(self.slot_minutes))
    }

    /// Start of `slot` on the reference date.
    pub fn slot_start(&self, slot: Slot) -> Result<NaiveDateTime> {
        let offset = i64::try_from(slot.index())
            .ok()
            .and_then(|k| k.checked_mul(i64::from(self.slot_minutes)))
            .and_then(Duration::try_minutes);
        offset
            .and_then(|d| REFERENCE_DATE.and_time(self.start).checked_add_signed(d))
            .ok_or_else(|| Error::InvalidDuration { input: self.slot_minutes.to_string() })
    }

    /// One window per palette slot, in palette order.
    pub fn slot_table(&self, palette: &Palette) -> Result<Vec<SlotWindow>> {
        palette
            .slots()
            .map(|slot| {
                let start = self.slot_start(slot)?;
                let end = start
                    .checked_add_signed(self.slot_duration())
                    .ok_or_else(|| Error::InvalidDuration { input: self.slot_minutes.to_string() })?;
                Ok(SlotWindow {
                    slot,
                    color: palette.token(slot).unwrap_or_default().to_string(),
                    start,
                    end,
                })
            })
            .collect()
    }
}

/// The time window of one palette slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub slot: Slot,
    pub color: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

// ============================================================================
// ScheduleMapper
// ============================================================================

/// Writes scheduled starts onto colored nodes.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleMapper<'p> {
    palette: &'p Palette,
}

impl<'p> ScheduleMapper<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Self { palette }
    }

    /// Assign every colored node the start of its slot. Uncolored nodes keep
    /// no start. Slot starts are computed up front, so on error no node is
    /// touched.
    pub fn apply(&self, graph: &mut ProximityGraph, params: &ScheduleParams) -> Result<()> {
        let starts = self
            .palette
            .slots()
            .map(|slot| params.slot_start(slot))
            .collect::<Result<Vec<_>>>()?;

        for node in graph.nodes_mut() {
            node.scheduled_start = node.slot.and_then(|s| starts.get(s.index()).copied());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
