use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how strongly accumulated evidence supports an inferred category.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Confidence from an evidence count that saturates at `saturation`:
    /// `min(1, count / saturation)`.
    pub fn saturating(count: u32, saturation: f64) -> Self {
        if saturation <= 0.0 {
            return Self::new(if count > 0 { 1.0 } else { 0.0 });
        }
        Self::new(f64::from(count) / saturation)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Reinforce with an independent source: `min(1, self + other * factor)`.
    pub fn corroborate(self, other: Confidence, factor: f64) -> Self {
        Self::new(self.0 + other.0 * factor)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
