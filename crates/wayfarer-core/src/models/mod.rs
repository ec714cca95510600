//! Data model: the observed action log, the aggregates kept beside it,
//! transient interest signals, and the immutable profile snapshot.

pub mod action;
pub mod aggregates;
pub mod city;
pub mod confidence;
pub mod dwell;
pub mod profile;
pub mod signal;

pub use action::{Action, ActionType};
pub use aggregates::DiscoveryAggregates;
pub use city::{TripCity, TripRoute};
pub use confidence::Confidence;
pub use dwell::DwellTotals;
pub use profile::{
    BehaviorPatterns, BudgetLevel, Inferred, InferredAvoidance, InferredInterest,
    ObservedProfile, Pace, TravelStyle,
};
pub use signal::{InterestSignal, SignalSource};
