//! # wayfarer-core
//!
//! Foundation crate for the Wayfarer preference-inference engine.
//! Defines the action log and profile types, the category taxonomy,
//! confidence scores, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WayfarerConfig;
pub use errors::{WayfarerError, WayfarerResult};
pub use models::{
    Action, ActionType, BehaviorPatterns, BudgetLevel, Confidence, DiscoveryAggregates,
    DwellTotals, InferredAvoidance, InferredInterest, InterestSignal, ObservedProfile, Pace,
    SignalSource, TravelStyle, TripCity, TripRoute,
};
pub use taxonomy::{avoidance_label, interest_label, AvoidanceCategory, InterestCategory, PlaceType};
