use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use crate::taxonomy::InterestCategory;

/// Extractor that produced an [`InterestSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    Favorites,
    Content,
}

/// Transient per-extractor evidence for one category.
/// Produced by an extractor, consumed by the merger, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestSignal {
    pub category: InterestCategory,
    /// This source's confidence contribution.
    pub weight: Confidence,
    pub source: SignalSource,
    /// Human-readable provenance lines.
    pub signals: Vec<String>,
}
