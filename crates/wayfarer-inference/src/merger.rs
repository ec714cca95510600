//! Confidence merger: combines per-extractor signals into one bounded
//! confidence per category.
//!
//! Contributions for a category fold strongest-first:
//! `c = min(1, c + w * corroboration_factor)`. A corroborated category
//! therefore always ends above its strongest single source (until it hits
//! 1.0). Provenance is concatenated in extractor order, never deduplicated.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use wayfarer_core::config::InferenceConfig;
use wayfarer_core::models::{Confidence, Inferred, InferredInterest, InterestSignal};
use wayfarer_core::taxonomy::InterestCategory;

struct Group {
    category: InterestCategory,
    weights: Vec<Confidence>,
    signals: Vec<String>,
}

/// Merge all signals from one recomputation pass.
///
/// Returns interests at or above `low_confidence_threshold`, sorted by
/// descending confidence; ties keep first-encountered order.
pub fn merge(
    signals: Vec<InterestSignal>,
    config: &InferenceConfig,
    now: DateTime<Utc>,
) -> Vec<InferredInterest> {
    let mut groups: Vec<Group> = Vec::new();
    for signal in signals {
        match groups.iter_mut().find(|g| g.category == signal.category) {
            Some(group) => {
                group.weights.push(signal.weight);
                group.signals.extend(signal.signals);
            }
            None => groups.push(Group {
                category: signal.category,
                weights: vec![signal.weight],
                signals: signal.signals,
            }),
        }
    }

    let mut interests: Vec<InferredInterest> = groups
        .into_iter()
        .map(|group| Inferred {
            category: group.category,
            confidence: combine(group.weights, config.corroboration_factor),
            signals: group.signals,
            last_updated: now,
        })
        .filter(|interest| interest.confidence.value() >= config.low_confidence_threshold)
        .collect();
    rank(&mut interests);
    interests
}

/// Fold independent contributions for one category, strongest first.
pub fn combine(mut weights: Vec<Confidence>, factor: f64) -> Confidence {
    weights.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    let mut iter = weights.into_iter();
    let Some(strongest) = iter.next() else {
        return Confidence::default();
    };
    iter.fold(strongest, |acc, weight| acc.corroborate(weight, factor))
}

/// Stable sort by descending confidence.
pub fn rank<C>(items: &mut [Inferred<C>]) {
    items.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
}
