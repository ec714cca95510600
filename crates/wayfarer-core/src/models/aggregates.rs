use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dwell::DwellTotals;
use super::profile::BudgetLevel;
use crate::taxonomy::PlaceType;

/// Aggregate counters maintained by the discovery session beside the
/// action log. Consumed read-only by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct DiscoveryAggregates {
    /// Place type → number of currently favorited places of that type.
    pub favorite_counts: BTreeMap<PlaceType, u32>,
    /// Total favorites across all place types.
    pub total_favorites: u32,
    /// Running average of nights allocated per city.
    pub average_nights_per_city: f64,
    /// Cities suggested to the user so far.
    pub total_suggested_cities: u32,
    /// Suggested cities the user removed.
    pub total_removed_cities: u32,
    /// Cities the user added to the trip.
    pub total_city_selections: u32,
    /// Added cities flagged as off-the-beaten-path by the suggestion source.
    pub hidden_gem_selections: u32,
    /// Explicit budget signal from the host, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_hint: Option<BudgetLevel>,
    pub dwell: DwellTotals,
}

impl DiscoveryAggregates {
    /// Removed / suggested, 0.0 without suggestion data.
    pub fn selectivity(&self) -> f64 {
        if self.total_suggested_cities == 0 {
            return 0.0;
        }
        (f64::from(self.total_removed_cities) / f64::from(self.total_suggested_cities)).min(1.0)
    }
}
