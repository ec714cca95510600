use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;
use crate::errors::WayfarerResult;
use crate::taxonomy::{AvoidanceCategory, InterestCategory};

/// An inferred category with its confidence and provenance trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Inferred<C> {
    pub category: C,
    pub confidence: Confidence,
    /// Human-readable evidence lines, in the order they were gathered.
    pub signals: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

/// Something the user appears to like.
pub type InferredInterest = Inferred<InterestCategory>;

/// Something the user appears to avoid. Only emitted with at least two
/// units of evidence.
pub type InferredAvoidance = Inferred<AvoidanceCategory>;

/// How quickly the user moves between cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Slow,
    Moderate,
    #[default]
    Fast,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Moderate => "moderate",
            Self::Fast => "fast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Budget,
    Moderate,
    Luxury,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TravelStyle {
    pub pace: Pace,
    pub prefers_hidden_gems: bool,
    pub budget_level: Option<BudgetLevel>,
}

/// Ratio statistics over the action log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BehaviorPatterns {
    pub total_actions_observed: u32,
    /// Favorites per city preview, in [0, 1].
    pub favorite_rate: f64,
    /// Removals per suggested city, in [0, 1].
    pub removal_rate: f64,
    /// Average seconds per closed dwell session.
    pub average_view_time: f64,
    /// Whether the latest action falls inside the activity window.
    pub is_active: bool,
}

/// Immutable snapshot of everything inferred from one action log.
///
/// Recreated wholesale on every recomputation. Treat it as a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ObservedProfile {
    /// Interests at or above the low-confidence threshold, descending.
    pub interests: Vec<InferredInterest>,
    /// Avoidances with enough evidence, descending.
    pub avoidances: Vec<InferredAvoidance>,
    pub travel_style: TravelStyle,
    pub behavior_patterns: BehaviorPatterns,
    /// Prefix of `interests`, at most three entries.
    pub top_interests: Vec<InferredInterest>,
    /// Natural-language paragraph for downstream assistants.
    pub summary_for_ai: String,
    pub computed_at: DateTime<Utc>,
}

impl ObservedProfile {
    /// Look up an emitted interest.
    pub fn interest(&self, category: InterestCategory) -> Option<&InferredInterest> {
        self.interests.iter().find(|i| i.category == category)
    }

    /// Look up an emitted avoidance.
    pub fn avoidance(&self, category: AvoidanceCategory) -> Option<&InferredAvoidance> {
        self.avoidances.iter().find(|a| a.category == category)
    }

    /// Serialize for a prompt-construction or logging pipeline.
    pub fn to_json(&self) -> WayfarerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
