//! DiscoverySession: owns the action log, the aggregate counters, the trip
//! route, and the dwell state for one discovery phase.
//!
//! Every recording method appends to the log first and only touches the
//! aggregates once the append succeeded.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use wayfarer_core::errors::SessionError;
use wayfarer_core::models::{
    Action, BudgetLevel, DiscoveryAggregates, ObservedProfile, TripCity, TripRoute,
};
use wayfarer_core::taxonomy::PlaceType;
use wayfarer_core::traits::{IClock, IProfiler, ProfileInputs};

use crate::dwell::DwellState;
use crate::log::ActionLog;

#[derive(Debug, Clone, Default)]
pub struct DiscoverySession {
    log: ActionLog,
    aggregates: DiscoveryAggregates,
    route: TripRoute,
    dwell: DwellState,
    /// Place ID → type, for places currently favorited.
    favorites: BTreeMap<String, PlaceType>,
    /// City ID → nights allocated.
    nights: BTreeMap<String, u32>,
}

impl DiscoverySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing route (origin and destination already chosen).
    pub fn with_route(route: TripRoute) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    // ── Places ──────────────────────────────────────────────────────────

    /// Favorite a place. Re-favoriting a place already favorited is logged
    /// but not counted twice.
    pub fn favorite_place(
        &mut self,
        place_id: &str,
        place_type: PlaceType,
        at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.log
            .append(Action::place_favorited(place_id, place_type, at))?;
        if self
            .favorites
            .insert(place_id.to_string(), place_type)
            .is_none()
        {
            *self.aggregates.favorite_counts.entry(place_type).or_insert(0) += 1;
            self.aggregates.total_favorites += 1;
        }
        Ok(())
    }

    /// Withdraw a favorite. Returns `false` when the place was not favorited,
    /// in which case nothing is logged.
    pub fn unfavorite_place(
        &mut self,
        place_id: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, SessionError> {
        let Some(&place_type) = self.favorites.get(place_id) else {
            debug!(place_id, "unfavorite ignored: not favorited");
            return Ok(false);
        };
        self.log
            .append(Action::place_unfavorited(place_id, place_type, at))?;
        self.favorites.remove(place_id);
        if let Some(count) = self.aggregates.favorite_counts.get_mut(&place_type) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.aggregates.favorite_counts.remove(&place_type);
            }
        }
        self.aggregates.total_favorites = self.aggregates.total_favorites.saturating_sub(1);
        Ok(true)
    }

    // ── Cities ──────────────────────────────────────────────────────────

    /// Count cities shown to the user as suggestions.
    pub fn record_suggestions(&mut self, count: u32) {
        self.aggregates.total_suggested_cities =
            self.aggregates.total_suggested_cities.saturating_add(count);
    }

    /// The user opened a suggested city's preview.
    pub fn preview_city(
        &mut self,
        city_id: &str,
        city_name: &str,
        at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.log
            .append(Action::city_preview_viewed(city_id, city_name, at))
    }

    /// Add a city as an intermediate stop. `hidden_gem` is the suggestion
    /// source's off-the-beaten-path flag.
    pub fn add_city(
        &mut self,
        city: TripCity,
        hidden_gem: bool,
        at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.log.append(Action::city_added(
            city.id.as_str(),
            city.name.as_str(),
            city.description.clone(),
            at,
        ))?;
        self.aggregates.total_city_selections += 1;
        if hidden_gem {
            self.aggregates.hidden_gem_selections += 1;
        }
        self.route.stops.push(city);
        Ok(())
    }

    /// Remove an intermediate stop. The removed city's name and description
    /// are kept in the log for the avoidance extractor.
    pub fn remove_city(&mut self, city_id: &str, at: DateTime<Utc>) -> Result<(), SessionError> {
        let index = self
            .route
            .stops
            .iter()
            .position(|c| c.id == city_id)
            .ok_or_else(|| SessionError::UnknownCity {
                city_id: city_id.to_string(),
            })?;
        let city = &self.route.stops[index];
        self.log.append(Action::city_removed(
            city.id.as_str(),
            city.name.as_str(),
            city.description.clone(),
            at,
        ))?;
        self.route.stops.remove(index);
        self.aggregates.total_removed_cities += 1;
        if self.nights.remove(city_id).is_some() {
            self.refresh_average_nights();
        }
        Ok(())
    }

    /// Allocate nights to a city on the route.
    pub fn set_nights(&mut self, city_id: &str, nights: u32) -> Result<(), SessionError> {
        if self.route.find(city_id).is_none() {
            return Err(SessionError::UnknownCity {
                city_id: city_id.to_string(),
            });
        }
        self.nights.insert(city_id.to_string(), nights);
        self.refresh_average_nights();
        Ok(())
    }

    /// Explicit budget signal from the host.
    pub fn set_budget(&mut self, budget: Option<BudgetLevel>) {
        self.aggregates.budget_hint = budget;
    }

    fn refresh_average_nights(&mut self) {
        self.aggregates.average_nights_per_city = if self.nights.is_empty() {
            0.0
        } else {
            let total: u32 = self.nights.values().sum();
            f64::from(total) / self.nights.len() as f64
        };
    }

    // ── Dwell ───────────────────────────────────────────────────────────

    /// Start viewing content of `place_type`, closing any open session.
    pub fn start_viewing(&mut self, place_type: PlaceType, at: DateTime<Utc>) {
        self.dwell = self.dwell.start(place_type, at, &mut self.aggregates.dwell);
    }

    /// Like [`start_viewing`](Self::start_viewing), but an open session on
    /// the same place type keeps running.
    pub fn switch_viewing(&mut self, place_type: PlaceType, at: DateTime<Utc>) {
        self.dwell = self
            .dwell
            .switch_to(place_type, at, &mut self.aggregates.dwell);
    }

    pub fn stop_viewing(&mut self, at: DateTime<Utc>) {
        self.dwell = self.dwell.stop(at, &mut self.aggregates.dwell);
    }

    pub fn dwell_state(&self) -> DwellState {
        self.dwell
    }

    // ── Observation ─────────────────────────────────────────────────────

    pub fn actions(&self) -> &[Action] {
        self.log.as_slice()
    }

    pub fn aggregates(&self) -> &DiscoveryAggregates {
        &self.aggregates
    }

    pub fn route(&self) -> &TripRoute {
        &self.route
    }

    /// Borrowed view handed to a profiler.
    pub fn inputs(&self) -> ProfileInputs<'_> {
        ProfileInputs {
            actions: self.log.as_slice(),
            aggregates: &self.aggregates,
            route: &self.route,
        }
    }

    /// Recompute the profile from the current state.
    pub fn observe(&self, profiler: &dyn IProfiler, clock: &dyn IClock) -> ObservedProfile {
        profiler.infer(self.inputs(), clock)
    }

    /// Tear the session down, closing any open dwell session, and hand back
    /// the final log and counters.
    pub fn close(self, at: DateTime<Utc>) -> (ActionLog, DiscoveryAggregates) {
        let Self {
            log,
            mut aggregates,
            dwell,
            ..
        } = self;
        dwell.finish(at, &mut aggregates.dwell);
        debug!(
            actions = log.len(),
            dwell_sessions = aggregates.dwell.sessions_closed,
            "discovery session closed"
        );
        (log, aggregates)
    }
}
