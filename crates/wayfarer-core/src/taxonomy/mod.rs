//! Fixed category taxonomy: place types observed in the action log,
//! interest categories, and avoidance categories.

pub mod avoidance;
pub mod interest;
pub mod labels;
pub mod place_type;

pub use avoidance::AvoidanceCategory;
pub use interest::InterestCategory;
pub use labels::{avoidance_label, interest_label};
pub use place_type::PlaceType;
