use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Tuning constants for the preference-inference engine.
///
/// The defaults are fixed contract values; overriding them changes the
/// meaning of every confidence the engine emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Favorite count at which a category saturates to confidence 1.0.
    pub favorite_saturation: f64,
    /// Matching-city count at which a content category saturates.
    pub content_saturation: f64,
    /// Evidence count at which an avoidance saturates.
    pub avoidance_saturation: f64,
    /// Evidence units required before an avoidance is emitted at all.
    pub min_avoidance_evidence: u32,
    /// City removals needed before the selectivity rule fires.
    pub selectivity_removal_threshold: u32,
    /// Weight applied to each corroborating source when merging.
    pub corroboration_factor: f64,
    /// Interests below this confidence are dropped.
    pub low_confidence_threshold: f64,
    /// Number of interests surfaced as top interests.
    pub top_interest_count: usize,
    /// Average nights per city at or above which pace is slow.
    pub slow_pace_min_nights: f64,
    /// Average nights per city at or above which pace is moderate.
    pub moderate_pace_min_nights: f64,
    /// Hidden-gem selections needed before the preference is asserted.
    pub hidden_gem_min_selections: u32,
    /// Share of city selections that must be hidden gems.
    pub hidden_gem_min_share: f64,
    /// Seconds since the last action within which the user counts as active.
    pub active_window_secs: i64,
    /// Favorite rate above which the summary notes engagement.
    pub engaged_favorite_rate: f64,
    /// Removal rate above which the summary notes selectivity.
    pub selective_removal_rate: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            favorite_saturation: defaults::DEFAULT_FAVORITE_SATURATION,
            content_saturation: defaults::DEFAULT_CONTENT_SATURATION,
            avoidance_saturation: defaults::DEFAULT_AVOIDANCE_SATURATION,
            min_avoidance_evidence: defaults::DEFAULT_MIN_AVOIDANCE_EVIDENCE,
            selectivity_removal_threshold: defaults::DEFAULT_SELECTIVITY_REMOVAL_THRESHOLD,
            corroboration_factor: defaults::DEFAULT_CORROBORATION_FACTOR,
            low_confidence_threshold: defaults::DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            top_interest_count: defaults::DEFAULT_TOP_INTEREST_COUNT,
            slow_pace_min_nights: defaults::DEFAULT_SLOW_PACE_MIN_NIGHTS,
            moderate_pace_min_nights: defaults::DEFAULT_MODERATE_PACE_MIN_NIGHTS,
            hidden_gem_min_selections: defaults::DEFAULT_HIDDEN_GEM_MIN_SELECTIONS,
            hidden_gem_min_share: defaults::DEFAULT_HIDDEN_GEM_MIN_SHARE,
            active_window_secs: defaults::DEFAULT_ACTIVE_WINDOW_SECS,
            engaged_favorite_rate: defaults::DEFAULT_ENGAGED_FAVORITE_RATE,
            selective_removal_rate: defaults::DEFAULT_SELECTIVE_REMOVAL_RATE,
        }
    }
}

impl InferenceConfig {
    /// Validate every tuning value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("inference.favorite_saturation", self.favorite_saturation),
            ("inference.content_saturation", self.content_saturation),
            ("inference.avoidance_saturation", self.avoidance_saturation),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, "must be a finite number greater than 0"));
            }
        }

        for (field, value) in [
            ("inference.corroboration_factor", self.corroboration_factor),
            ("inference.low_confidence_threshold", self.low_confidence_threshold),
            ("inference.hidden_gem_min_share", self.hidden_gem_min_share),
            ("inference.engaged_favorite_rate", self.engaged_favorite_rate),
            ("inference.selective_removal_rate", self.selective_removal_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }

        // A single incidental action must never assert an avoidance.
        if self.min_avoidance_evidence < 2 {
            return Err(invalid(
                "inference.min_avoidance_evidence",
                "must be at least 2",
            ));
        }
        if self.top_interest_count == 0 {
            return Err(invalid("inference.top_interest_count", "must be at least 1"));
        }
        if self.active_window_secs < 0 {
            return Err(invalid("inference.active_window_secs", "must not be negative"));
        }
        if !self.moderate_pace_min_nights.is_finite()
            || !self.slow_pace_min_nights.is_finite()
            || self.moderate_pace_min_nights > self.slow_pace_min_nights
        {
            return Err(invalid(
                "inference.moderate_pace_min_nights",
                "must be finite and not exceed slow_pace_min_nights",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
