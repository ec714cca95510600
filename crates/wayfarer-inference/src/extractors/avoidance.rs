use chrono::{DateTime, Utc};
use tracing::debug;
use wayfarer_core::config::InferenceConfig;
use wayfarer_core::models::{Action, ActionType, Confidence, Inferred, InferredAvoidance};
use wayfarer_core::taxonomy::AvoidanceCategory;
use wayfarer_observability::events;

use super::{first_unit, Tally};
use crate::merger;
use crate::tables::AVOIDANCE_KEYWORDS;

/// Avoidance extractor.
///
/// Two rules feed one tally:
/// - content: a removed city mentioning an avoidance keyword adds one unit
///   to that category (at most one per removal and category);
/// - selectivity: once the log holds enough removals, one unit goes to
///   [`AvoidanceCategory::Crowds`].
///
/// Categories below `min_avoidance_evidence` units are never emitted.
/// Confidence is `min(1, units / avoidance_saturation)`.
pub struct AvoidanceExtractor;

impl AvoidanceExtractor {
    pub fn extract(
        actions: &[Action],
        config: &InferenceConfig,
        now: DateTime<Utc>,
    ) -> Vec<InferredAvoidance> {
        let mut tally: Tally<AvoidanceCategory> = Tally::new();
        let mut removals = 0u32;

        for action in actions.iter().filter(|a| a.is(ActionType::CityRemoved)) {
            removals += 1;
            let text = action.city_search_text();
            let name = action
                .city_name
                .as_deref()
                .unwrap_or(action.target_id.as_str());
            let mut seen = Vec::new();
            for (keyword, category) in AVOIDANCE_KEYWORDS {
                if text.contains(keyword) {
                    let units = first_unit(&mut seen, *category);
                    tally.add(*category, units, format!("Removed {name} (\"{keyword}\")"));
                }
            }
        }

        if removals >= config.selectivity_removal_threshold {
            tally.add(
                AvoidanceCategory::Crowds,
                1,
                format!("Removed {removals} suggested cities"),
            );
        }

        let candidates = tally.len();
        let mut avoidances: Vec<InferredAvoidance> = tally
            .into_entries()
            .into_iter()
            .filter(|e| e.units >= config.min_avoidance_evidence)
            .map(|e| {
                let confidence = Confidence::saturating(e.units, config.avoidance_saturation);
                events::avoidance_emitted(e.category.as_str(), e.units, confidence.value());
                Inferred {
                    category: e.category,
                    confidence,
                    signals: e.signals,
                    last_updated: now,
                }
            })
            .collect();
        merger::rank(&mut avoidances);

        debug!(
            removals,
            candidates,
            emitted = avoidances.len(),
            "avoidances extracted"
        );
        avoidances
    }
}
