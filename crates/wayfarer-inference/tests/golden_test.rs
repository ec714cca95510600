//! Golden scenarios under test-fixtures/golden/profile.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use wayfarer_core::models::{Action, DiscoveryAggregates, Pace, TripRoute};
use wayfarer_core::taxonomy::{AvoidanceCategory, InterestCategory};
use wayfarer_core::traits::FixedClock;
use wayfarer_inference::compute_profile;

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    now: DateTime<Utc>,
    actions: Vec<Action>,
    aggregates: DiscoveryAggregates,
    route: TripRoute,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    interests: Vec<Scored<InterestCategory>>,
    avoidances: Vec<Scored<AvoidanceCategory>>,
    pace: Pace,
    is_active: bool,
    summary: String,
}

#[derive(Debug, Deserialize)]
struct Scored<C> {
    category: C,
    confidence: f64,
}

fn run(scenario: &Scenario) {
    let profile = compute_profile(
        &scenario.actions,
        &scenario.aggregates,
        &scenario.route,
        &FixedClock::at(scenario.now),
    );
    let name = &scenario.name;
    let expected = &scenario.expected;

    assert_eq!(
        profile.interests.len(),
        expected.interests.len(),
        "{name}: interests {:?}",
        profile.interests
    );
    for (got, want) in profile.interests.iter().zip(&expected.interests) {
        assert_eq!(got.category, want.category, "{name}");
        assert!(
            (got.confidence.value() - want.confidence).abs() < 1e-9,
            "{name}: {:?} confidence {} != {}",
            got.category,
            got.confidence.value(),
            want.confidence
        );
    }

    assert_eq!(
        profile.avoidances.len(),
        expected.avoidances.len(),
        "{name}: avoidances {:?}",
        profile.avoidances
    );
    for (got, want) in profile.avoidances.iter().zip(&expected.avoidances) {
        assert_eq!(got.category, want.category, "{name}");
        assert!((got.confidence.value() - want.confidence).abs() < 1e-9, "{name}");
    }

    assert_eq!(profile.travel_style.pace, expected.pace, "{name}");
    assert_eq!(profile.behavior_patterns.is_active, expected.is_active, "{name}");
    assert_eq!(profile.summary_for_ai, expected.summary, "{name}");
}

#[test]
fn all_profile_scenarios_match() {
    let files = test_fixtures::list_fixtures("golden/profile");
    assert!(files.len() >= 7, "expected golden scenarios, found {}", files.len());
    for path in files {
        let scenario: Scenario = test_fixtures::load_fixture_at(&path);
        run(&scenario);
    }
}

#[test]
fn scenario_a_favorites() {
    let scenario: Scenario = test_fixtures::load_fixture("golden/profile/scenario_a_favorites.json");
    run(&scenario);
}

#[test]
fn scenario_c_single_removal_is_below_floor() {
    let scenario: Scenario =
        test_fixtures::load_fixture("golden/profile/scenario_c_single_removal.json");
    assert!(scenario.expected.avoidances.is_empty());
    run(&scenario);
}
