//! # wayfarer-inference
//!
//! Passive preference inference over a discovery-phase action log.
//! Derives interests, avoidances, travel style, and behavior patterns
//! without asking the user a single question.
//!
//! ## Evidence Sources
//!
//! | Extractor | Input | Saturates at |
//! |-----------|-------|--------------|
//! | Favorites | Per-place-type favorite counts | 5 favorites |
//! | Content | Names/descriptions of trip cities | 3 matching cities |
//! | Avoidance | Removed cities + removal count | 4 evidence units |
//!
//! ## Merging
//!
//! When a category appears in several extractors, contributions fold
//! strongest-first as `min(1, c + w * 0.5)`. Provenance is concatenated.
//! Interests below 0.3 are dropped; avoidances need two evidence units.

pub mod engine;
pub mod extractors;
pub mod merger;
pub mod patterns;
pub mod style;
pub mod summary;
pub mod tables;

pub use engine::{compute_profile, ProfileEngine};
