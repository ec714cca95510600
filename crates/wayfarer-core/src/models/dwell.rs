use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::taxonomy::PlaceType;

/// Accumulated dwell time per place type, from closed tracking sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct DwellTotals {
    /// Place type → total seconds spent viewing.
    pub seconds_by_place_type: BTreeMap<PlaceType, f64>,
    /// Number of tracking sessions closed so far.
    pub sessions_closed: u32,
}

impl DwellTotals {
    /// Add one closed session. Negative durations are clamped to zero.
    pub fn record(&mut self, place_type: PlaceType, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        *self.seconds_by_place_type.entry(place_type).or_insert(0.0) += seconds;
        self.sessions_closed += 1;
    }

    /// Total seconds across all place types.
    pub fn total_seconds(&self) -> f64 {
        self.seconds_by_place_type.values().sum()
    }

    /// Average seconds per closed session, 0.0 when none are closed.
    pub fn average_seconds(&self) -> f64 {
        if self.sessions_closed == 0 {
            return 0.0;
        }
        self.total_seconds() / f64::from(self.sessions_closed)
    }
}
