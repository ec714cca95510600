//! Travel-style estimator. Pure threshold functions over aggregate
//! counters; no smoothing across recomputations.

use wayfarer_core::config::InferenceConfig;
use wayfarer_core::models::{DiscoveryAggregates, Pace, TravelStyle};

/// Classify pace from the running average of nights per city.
/// Non-finite averages count as zero nights.
pub fn classify_pace(average_nights: f64, config: &InferenceConfig) -> Pace {
    if !average_nights.is_finite() {
        return Pace::Fast;
    }
    if average_nights >= config.slow_pace_min_nights {
        Pace::Slow
    } else if average_nights >= config.moderate_pace_min_nights {
        Pace::Moderate
    } else {
        Pace::Fast
    }
}

/// True when enough of the user's picks were flagged as hidden gems.
pub fn prefers_hidden_gems(aggregates: &DiscoveryAggregates, config: &InferenceConfig) -> bool {
    let picks = aggregates.hidden_gem_selections;
    let total = aggregates.total_city_selections;
    if picks < config.hidden_gem_min_selections || total == 0 {
        return false;
    }
    let share = f64::from(picks.min(total)) / f64::from(total);
    share >= config.hidden_gem_min_share
}

/// Estimate the full travel style.
pub fn estimate(aggregates: &DiscoveryAggregates, config: &InferenceConfig) -> TravelStyle {
    TravelStyle {
        pace: classify_pace(aggregates.average_nights_per_city, config),
        prefers_hidden_gems: prefers_hidden_gems(aggregates, config),
        budget_level: aggregates.budget_hint,
    }
}
