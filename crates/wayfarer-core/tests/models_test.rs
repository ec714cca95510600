use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use wayfarer_core::models::*;
use wayfarer_core::taxonomy::*;

// ── Confidence ────────────────────────────────────────────────────────────

#[test]
fn confidence_clamps_and_rejects_nan() {
    assert_eq!(Confidence::new(1.7).value(), 1.0);
    assert_eq!(Confidence::new(-0.2).value(), 0.0);
    assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
}

#[test]
fn saturating_confidence_matches_count_over_saturation() {
    assert_eq!(Confidence::saturating(5, 5.0).value(), 1.0);
    assert!((Confidence::saturating(2, 4.0).value() - 0.5).abs() < f64::EPSILON);
    assert_eq!(Confidence::saturating(9, 3.0).value(), 1.0);
    assert_eq!(Confidence::saturating(0, 3.0).value(), 0.0);
}

#[test]
fn corroboration_adds_half_and_caps() {
    let merged = Confidence::new(0.6).corroborate(Confidence::new(0.4), 0.5);
    assert!((merged.value() - 0.8).abs() < 1e-12);
    let capped = Confidence::new(0.9).corroborate(Confidence::new(1.0), 0.5);
    assert_eq!(capped.value(), 1.0);
}

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(v in proptest::num::f64::ANY) {
        let c = Confidence::new(v).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn corroboration_never_decreases(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let merged = Confidence::new(a).corroborate(Confidence::new(b), 0.5);
        prop_assert!(merged.value() >= a);
        prop_assert!(merged.value() <= 1.0);
    }
}

// ── Actions & route ───────────────────────────────────────────────────────

#[test]
fn action_search_text_lowercases_name_and_description() {
    let at = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
    let action = Action::city_removed("c1", "Zermatt", Some("Mountain Village".to_string()), at);
    assert_eq!(action.city_search_text(), "zermatt mountain village");
    assert!(action.is(ActionType::CityRemoved));
}

#[test]
fn unfavorite_keeps_place_type() {
    let at = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
    let action = Action::place_unfavorited("p1", PlaceType::Bar, at);
    assert_eq!(action.action_type, ActionType::PlaceUnfavorited);
    assert_eq!(action.place_type, Some(PlaceType::Bar));
}

#[test]
fn route_iterates_origin_stops_destination() {
    let route = TripRoute {
        origin: Some(TripCity::new("a", "Lisbon")),
        stops: vec![TripCity::new("b", "Porto"), TripCity::new("c", "Braga")],
        destination: Some(TripCity::new("d", "Vigo")),
    };
    let names: Vec<_> = route.cities().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Lisbon", "Porto", "Braga", "Vigo"]);
    assert_eq!(route.len(), 4);
    assert_eq!(route.find("c").map(|c| c.name.as_str()), Some("Braga"));
    assert!(TripRoute::default().is_empty());
}

#[test]
fn unknown_place_type_deserializes_to_other() {
    let pt: PlaceType = serde_json::from_str("\"casino\"").unwrap();
    assert_eq!(pt, PlaceType::Other);
    let pt: PlaceType = serde_json::from_str("\"art_gallery\"").unwrap();
    assert_eq!(pt, PlaceType::ArtGallery);
}

#[test]
fn action_json_omits_absent_optionals() {
    let at = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
    let json = serde_json::to_value(Action::place_favorited("p1", PlaceType::Cafe, at)).unwrap();
    assert_eq!(json["action_type"], "place_favorited");
    assert_eq!(json["place_type"], "cafe");
    assert!(json.get("city_name").is_none());
}

// ── Aggregates & dwell ────────────────────────────────────────────────────

#[test]
fn dwell_totals_average_over_closed_sessions() {
    let mut totals = DwellTotals::default();
    assert_eq!(totals.average_seconds(), 0.0);
    totals.record(PlaceType::Museum, 30.0);
    totals.record(PlaceType::Museum, 10.0);
    totals.record(PlaceType::Beach, -5.0);
    assert_eq!(totals.sessions_closed, 3);
    assert_eq!(totals.seconds_by_place_type[&PlaceType::Museum], 40.0);
    assert_eq!(totals.seconds_by_place_type[&PlaceType::Beach], 0.0);
    assert!((totals.average_seconds() - 40.0 / 3.0).abs() < 1e-12);
}

#[test]
fn selectivity_is_zero_without_suggestions() {
    let mut aggregates = DiscoveryAggregates::default();
    assert_eq!(aggregates.selectivity(), 0.0);
    aggregates.total_suggested_cities = 10;
    aggregates.total_removed_cities = 4;
    assert!((aggregates.selectivity() - 0.4).abs() < f64::EPSILON);
}

#[test]
fn aggregates_deserialize_from_partial_json() {
    let aggregates: DiscoveryAggregates =
        serde_json::from_str(r#"{"favorite_counts": {"restaurant": 5}, "total_favorites": 5}"#)
            .unwrap();
    assert_eq!(aggregates.favorite_counts[&PlaceType::Restaurant], 5);
    assert_eq!(aggregates.average_nights_per_city, 0.0);
    assert!(aggregates.budget_hint.is_none());
}

#[test]
fn pace_defaults_to_fast() {
    assert_eq!(Pace::default(), Pace::Fast);
    assert_eq!(TravelStyle::default().pace.as_str(), "fast");
}
