use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use wayfarer_core::config::InferenceConfig;
use wayfarer_core::models::{Action, Confidence, DiscoveryAggregates, TripCity, TripRoute};
use wayfarer_core::taxonomy::PlaceType;
use wayfarer_core::traits::FixedClock;
use wayfarer_inference::merger::combine;
use wayfarer_inference::ProfileEngine;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 10, 0, 0).unwrap()
}

const DESCRIPTIONS: &[&str] = &[
    "Mountain village",
    "Crowded touristy center",
    "Long beach coast",
    "Historic old town",
    "Nightlife and party district",
    "Quiet fishing port",
    "Snow and glacier views",
    "Food market and wine bars",
];

fn arb_place_type() -> impl Strategy<Value = PlaceType> {
    proptest::sample::select(PlaceType::ALL.to_vec())
}

fn arb_favorites() -> impl Strategy<Value = BTreeMap<PlaceType, u32>> {
    proptest::collection::btree_map(arb_place_type(), 0u32..12, 0..8)
}

fn arb_city() -> impl Strategy<Value = (usize, usize)> {
    (0usize..1000, 0usize..DESCRIPTIONS.len())
}

fn route_from(cities: &[(usize, usize)]) -> TripRoute {
    TripRoute {
        origin: None,
        stops: cities
            .iter()
            .map(|(id, d)| {
                TripCity::new(format!("c{id}"), format!("City {id}"))
                    .with_description(DESCRIPTIONS[*d])
            })
            .collect(),
        destination: None,
    }
}

fn removals_from(cities: &[(usize, usize)]) -> Vec<Action> {
    cities
        .iter()
        .enumerate()
        .map(|(i, (id, d))| {
            Action::city_removed(
                format!("r{id}"),
                format!("Removed {id}"),
                Some(DESCRIPTIONS[*d].to_string()),
                base() + Duration::seconds(i as i64),
            )
        })
        .collect()
}

fn aggregates_from(favorites: BTreeMap<PlaceType, u32>, nights: f64) -> DiscoveryAggregates {
    DiscoveryAggregates {
        total_favorites: favorites.values().sum(),
        favorite_counts: favorites,
        average_nights_per_city: nights,
        ..Default::default()
    }
}

// ── Bounds and ordering ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn confidences_stay_in_unit_interval(
        favorites in arb_favorites(),
        stops in proptest::collection::vec(arb_city(), 0..6),
        removed in proptest::collection::vec(arb_city(), 0..8),
        nights in 0.0f64..10.0,
    ) {
        let engine = ProfileEngine::new();
        let profile = engine.compute(
            &removals_from(&removed),
            &aggregates_from(favorites, nights),
            &route_from(&stops),
            &FixedClock::at(base() + Duration::minutes(5)),
        );
        for interest in &profile.interests {
            let c = interest.confidence.value();
            prop_assert!((0.3..=1.0).contains(&c), "interest confidence {c}");
        }
        for avoidance in &profile.avoidances {
            let c = avoidance.confidence.value();
            prop_assert!((0.0..=1.0).contains(&c), "avoidance confidence {c}");
        }
        prop_assert!((0.0..=1.0).contains(&profile.behavior_patterns.favorite_rate));
        prop_assert!((0.0..=1.0).contains(&profile.behavior_patterns.removal_rate));
    }

    #[test]
    fn interests_sorted_and_top_is_prefix(
        favorites in arb_favorites(),
        stops in proptest::collection::vec(arb_city(), 0..6),
    ) {
        let profile = ProfileEngine::new().compute(
            &[],
            &aggregates_from(favorites, 1.0),
            &route_from(&stops),
            &FixedClock::at(base()),
        );
        for pair in profile.interests.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
        prop_assert!(profile.top_interests.len() <= 3);
        prop_assert_eq!(
            &profile.top_interests[..],
            &profile.interests[..profile.top_interests.len()]
        );
    }

    #[test]
    fn avoidances_need_at_least_two_units(
        removed in proptest::collection::vec(arb_city(), 0..8),
    ) {
        let actions = removals_from(&removed);
        let profile = ProfileEngine::new().compute(
            &actions,
            &DiscoveryAggregates::default(),
            &TripRoute::default(),
            &FixedClock::at(base()),
        );
        for avoidance in &profile.avoidances {
            // Two units over a saturation of four is the lowest emittable value.
            prop_assert!(avoidance.confidence.value() >= 0.5);
        }
        if actions.len() < 2 {
            prop_assert!(profile.avoidances.is_empty());
        }
    }

    #[test]
    fn recomputation_is_deterministic(
        favorites in arb_favorites(),
        stops in proptest::collection::vec(arb_city(), 0..6),
        removed in proptest::collection::vec(arb_city(), 0..8),
    ) {
        let engine = ProfileEngine::new();
        let actions = removals_from(&removed);
        let aggregates = aggregates_from(favorites, 2.0);
        let route = route_from(&stops);
        let clock = FixedClock::at(base() + Duration::seconds(30));
        let first = engine.compute(&actions, &aggregates, &route, &clock);
        let second = engine.compute(&actions, &aggregates, &route, &clock);
        prop_assert_eq!(first, second);
    }
}

// ── Merging ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn corroboration_strictly_increases_below_one(
        a in 0.01f64..0.99,
        b in 0.01f64..0.99,
    ) {
        let factor = InferenceConfig::default().corroboration_factor;
        let merged = combine(vec![Confidence::new(a), Confidence::new(b)], factor);
        prop_assert!(merged.value() > a.max(b));
        prop_assert!(merged.value() <= 1.0);
    }

    #[test]
    fn combine_is_order_independent(
        weights in proptest::collection::vec(0.0f64..1.0, 1..5),
    ) {
        let factor = InferenceConfig::default().corroboration_factor;
        let forward: Vec<Confidence> = weights.iter().copied().map(Confidence::new).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        prop_assert_eq!(combine(forward, factor), combine(reversed, factor));
    }
}
