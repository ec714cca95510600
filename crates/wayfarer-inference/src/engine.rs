//! ProfileEngine: runs every extractor, merges, and assembles the
//! immutable [`ObservedProfile`].
//!
//! Implements `IProfiler` from wayfarer-core.

use wayfarer_core::config::InferenceConfig;
use wayfarer_core::errors::WayfarerResult;
use wayfarer_core::models::{Action, DiscoveryAggregates, ObservedProfile, TripRoute};
use wayfarer_core::traits::{IClock, IProfiler, ProfileInputs};
use wayfarer_observability::{events, extractor_span, profile_span};

use crate::extractors::avoidance::AvoidanceExtractor;
use crate::extractors::content::ContentExtractor;
use crate::extractors::favorites::FavoritesExtractor;
use crate::{merger, patterns, style, summary};

/// Preference-inference engine. Stateless apart from its tuning config;
/// every call recomputes from scratch.
#[derive(Debug, Clone, Default)]
pub struct ProfileEngine {
    config: InferenceConfig,
}

impl ProfileEngine {
    /// Create an engine with the contract defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom tuning. Fails if the config is invalid.
    pub fn with_config(config: InferenceConfig) -> WayfarerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Recompute the full profile.
    ///
    /// Pure apart from `clock`: identical inputs and a fixed clock always
    /// yield an identical profile.
    pub fn compute(
        &self,
        actions: &[Action],
        aggregates: &DiscoveryAggregates,
        route: &TripRoute,
        clock: &dyn IClock,
    ) -> ObservedProfile {
        let span = profile_span!(actions.len(), route.len());
        let _guard = span.enter();
        let config = &self.config;
        let now = clock.now();

        // Step 1: Interest signals from favorites, then trip content.
        let mut signals = {
            let _s = extractor_span!("favorites").entered();
            FavoritesExtractor::extract(
                &aggregates.favorite_counts,
                aggregates.total_favorites,
                config.favorite_saturation,
            )
        };
        {
            let _s = extractor_span!("content").entered();
            signals.extend(ContentExtractor::extract(route, config.content_saturation));
        }

        // Step 2: Merge into bounded per-category confidences.
        let interests = merger::merge(signals, config, now);

        // Step 3: Avoidances carry their own evidence floor.
        let avoidances = {
            let _s = extractor_span!("avoidance").entered();
            AvoidanceExtractor::extract(actions, config, now)
        };

        // Step 4: Aggregate-driven style and log-driven patterns.
        let travel_style = style::estimate(aggregates, config);
        let behavior_patterns = patterns::calculate(actions, aggregates, now, config);

        // Step 5: Top interests are a prefix of the ranked list.
        let top_interests: Vec<_> = interests
            .iter()
            .take(config.top_interest_count)
            .cloned()
            .collect();

        let summary_for_ai = summary::generate(
            &top_interests,
            &avoidances,
            &travel_style,
            &behavior_patterns,
            config,
        );

        events::profile_computed(
            actions.len(),
            interests.len(),
            avoidances.len(),
            travel_style.pace.as_str(),
        );

        ObservedProfile {
            interests,
            avoidances,
            travel_style,
            behavior_patterns,
            top_interests,
            summary_for_ai,
            computed_at: now,
        }
    }
}

impl IProfiler for ProfileEngine {
    fn infer(&self, inputs: ProfileInputs<'_>, clock: &dyn IClock) -> ObservedProfile {
        self.compute(inputs.actions, inputs.aggregates, inputs.route, clock)
    }
}

/// Compute a profile with the default contract configuration.
pub fn compute_profile(
    actions: &[Action],
    aggregates: &DiscoveryAggregates,
    route: &TripRoute,
    clock: &dyn IClock,
) -> ObservedProfile {
    ProfileEngine::new().compute(actions, aggregates, route, clock)
}
