//! Behavior-pattern calculator: ratio statistics over the action log.

use chrono::{DateTime, Duration, Utc};
use wayfarer_core::config::InferenceConfig;
use wayfarer_core::models::{Action, ActionType, BehaviorPatterns, DiscoveryAggregates};

/// Compute behavior patterns. Never divides by zero, never returns NaN.
pub fn calculate(
    actions: &[Action],
    aggregates: &DiscoveryAggregates,
    now: DateTime<Utc>,
    config: &InferenceConfig,
) -> BehaviorPatterns {
    let (mut favorites, mut removals, mut previews) = (0u32, 0u32, 0u32);
    for action in actions {
        match action.action_type {
            ActionType::PlaceFavorited => favorites += 1,
            ActionType::CityRemoved => removals += 1,
            ActionType::CityPreviewViewed => previews += 1,
            ActionType::PlaceUnfavorited | ActionType::CityAdded => {}
        }
    }

    // Favorites per preview only when previews exist.
    let favorite_rate = if previews > 0 {
        unit_ratio(favorites, previews)
    } else {
        0.0
    };
    let removal_rate = unit_ratio(removals, aggregates.total_suggested_cities.max(1));

    BehaviorPatterns {
        total_actions_observed: u32::try_from(actions.len()).unwrap_or(u32::MAX),
        favorite_rate,
        removal_rate,
        average_view_time: aggregates.dwell.average_seconds(),
        is_active: is_active(actions, now, config.active_window_secs),
    }
}

/// Whether the most recent action lies within `window_secs` of `now`.
pub fn is_active(actions: &[Action], now: DateTime<Utc>, window_secs: i64) -> bool {
    actions
        .iter()
        .map(|a| a.timestamp)
        .max()
        .is_some_and(|last| now.signed_duration_since(last) <= Duration::seconds(window_secs))
}

fn unit_ratio(numerator: u32, denominator: u32) -> f64 {
    (f64::from(numerator) / f64::from(denominator)).min(1.0)
}
