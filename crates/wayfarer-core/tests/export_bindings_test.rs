//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p wayfarer-core export_bindings
//! Generated files appear in wayfarer-core/bindings/*.ts

#[test]
fn export_bindings() {
    // ts-rs writes a .ts file for every type with #[ts(export)] when
    // `cargo test` runs. This test keeps every exported type importable.
    use wayfarer_core::models::{
        Action, ActionType, BehaviorPatterns, BudgetLevel, Confidence, DiscoveryAggregates,
        DwellTotals, ObservedProfile, Pace, TravelStyle, TripCity, TripRoute,
    };
    use wayfarer_core::taxonomy::{AvoidanceCategory, InterestCategory, PlaceType};

    let _ = std::any::type_name::<Action>();
    let _ = std::any::type_name::<ActionType>();
    let _ = std::any::type_name::<BehaviorPatterns>();
    let _ = std::any::type_name::<BudgetLevel>();
    let _ = std::any::type_name::<Confidence>();
    let _ = std::any::type_name::<DiscoveryAggregates>();
    let _ = std::any::type_name::<DwellTotals>();
    let _ = std::any::type_name::<ObservedProfile>();
    let _ = std::any::type_name::<Pace>();
    let _ = std::any::type_name::<TravelStyle>();
    let _ = std::any::type_name::<TripCity>();
    let _ = std::any::type_name::<TripRoute>();
    let _ = std::any::type_name::<AvoidanceCategory>();
    let _ = std::any::type_name::<InterestCategory>();
    let _ = std::any::type_name::<PlaceType>();
}
