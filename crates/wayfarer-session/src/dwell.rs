//! Dwell-time tracking as an explicit two-state machine.
//!
//! The caller owns the state and threads it through each transition by
//! value. Closed sessions are accumulated into [`DwellTotals`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wayfarer_core::models::DwellTotals;
use wayfarer_core::taxonomy::PlaceType;
use wayfarer_observability::events;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DwellState {
    #[default]
    Idle,
    Tracking {
        place_type: PlaceType,
        started_at: DateTime<Utc>,
    },
}

impl DwellState {
    /// Begin tracking `place_type`. An open session is closed first, even
    /// when it tracks the same place type.
    #[must_use]
    pub fn start(self, place_type: PlaceType, at: DateTime<Utc>, totals: &mut DwellTotals) -> Self {
        self.finish(at, totals);
        Self::Tracking {
            place_type,
            started_at: at,
        }
    }

    /// Move attention to `place_type`. Keeps the open session running when
    /// it already tracks that place type.
    #[must_use]
    pub fn switch_to(
        self,
        place_type: PlaceType,
        at: DateTime<Utc>,
        totals: &mut DwellTotals,
    ) -> Self {
        match self {
            Self::Tracking {
                place_type: current,
                ..
            } if current == place_type => self,
            _ => self.start(place_type, at, totals),
        }
    }

    /// Close the open session, if any. No-op when idle.
    #[must_use]
    pub fn stop(self, at: DateTime<Utc>, totals: &mut DwellTotals) -> Self {
        self.finish(at, totals);
        Self::Idle
    }

    /// Teardown: close any open session. Consumes the state so it cannot
    /// be closed twice.
    pub fn finish(self, at: DateTime<Utc>, totals: &mut DwellTotals) {
        if let Self::Tracking {
            place_type,
            started_at,
        } = self
        {
            let seconds = elapsed_seconds(started_at, at);
            totals.record(place_type, seconds);
            events::dwell_session_closed(place_type.noun(), seconds);
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking { .. })
    }
}

/// Seconds between two instants, clamped to zero.
fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = to.signed_duration_since(from).num_milliseconds().max(0);
    millis as f64 / 1000.0
}
