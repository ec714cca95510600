//! Summary generator: renders a profile into a short paragraph for
//! downstream assistants. Clause order is fixed.

use wayfarer_core::config::InferenceConfig;
use wayfarer_core::constants::SUMMARY_CLAUSE_SEPARATOR;
use wayfarer_core::models::{
    BehaviorPatterns, InferredAvoidance, InferredInterest, Pace, TravelStyle,
};
use wayfarer_core::taxonomy::{avoidance_label, interest_label};

pub const HIDDEN_GEMS_CLAUSE: &str = "Prefers hidden gems over popular tourist spots";
pub const ENGAGED_CLAUSE: &str = "Actively favorites places while browsing";
pub const SELECTIVE_CLAUSE: &str = "Very selective about destinations";

/// Fixed phrase describing a pace.
pub fn pace_phrase(pace: Pace) -> &'static str {
    match pace {
        Pace::Slow => "slow pace (3+ nights per city)",
        Pace::Moderate => "moderate pace (2-3 nights per city)",
        Pace::Fast => "fast pace (1 night per city)",
    }
}

/// Build the summary. Clauses, in order:
/// interests, avoidances, travel style (always), hidden gems,
/// engagement, selectivity.
pub fn generate(
    top_interests: &[InferredInterest],
    avoidances: &[InferredAvoidance],
    style: &TravelStyle,
    patterns: &BehaviorPatterns,
    config: &InferenceConfig,
) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(6);

    if !top_interests.is_empty() {
        let labels: Vec<&str> = top_interests
            .iter()
            .map(|i| interest_label(i.category))
            .collect();
        clauses.push(format!("Interests: {}", labels.join(", ")));
    }

    if !avoidances.is_empty() {
        let labels: Vec<&str> = avoidances
            .iter()
            .map(|a| avoidance_label(a.category))
            .collect();
        clauses.push(format!("Prefers to avoid: {}", labels.join(", ")));
    }

    clauses.push(format!("Travel style: {}", pace_phrase(style.pace)));

    if style.prefers_hidden_gems {
        clauses.push(HIDDEN_GEMS_CLAUSE.to_string());
    }
    if patterns.favorite_rate > config.engaged_favorite_rate {
        clauses.push(ENGAGED_CLAUSE.to_string());
    }
    if patterns.removal_rate > config.selective_removal_rate {
        clauses.push(SELECTIVE_CLAUSE.to_string());
    }

    format!("{}.", clauses.join(SUMMARY_CLAUSE_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use wayfarer_core::models::{Confidence, Inferred};
    use wayfarer_core::taxonomy::{AvoidanceCategory, InterestCategory};

    fn interest(category: InterestCategory) -> InferredInterest {
        Inferred {
            category,
            confidence: Confidence::new(0.9),
            signals: vec![],
            last_updated: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn avoidance(category: AvoidanceCategory) -> InferredAvoidance {
        Inferred {
            category,
            confidence: Confidence::new(0.5),
            signals: vec![],
            last_updated: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_profile_has_only_travel_style() {
        let summary = generate(
            &[],
            &[],
            &TravelStyle::default(),
            &BehaviorPatterns::default(),
            &InferenceConfig::default(),
        );
        assert_eq!(summary, "Travel style: fast pace (1 night per city).");
    }

    #[test]
    fn all_clauses_in_fixed_order() {
        let style = TravelStyle {
            pace: Pace::Slow,
            prefers_hidden_gems: true,
            budget_level: None,
        };
        let patterns = BehaviorPatterns {
            favorite_rate: 0.5,
            removal_rate: 0.6,
            ..Default::default()
        };
        let summary = generate(
            &[
                interest(InterestCategory::Foodie),
                interest(InterestCategory::ArtLover),
            ],
            &[avoidance(AvoidanceCategory::Hiking)],
            &style,
            &patterns,
            &InferenceConfig::default(),
        );
        assert_eq!(
            summary,
            "Interests: Food & Dining, Art. \
             Prefers to avoid: Hiking & strenuous activities. \
             Travel style: slow pace (3+ nights per city). \
             Prefers hidden gems over popular tourist spots. \
             Actively favorites places while browsing. \
             Very selective about destinations."
        );
    }

    #[test]
    fn rate_clauses_are_strictly_greater_than() {
        let patterns = BehaviorPatterns {
            favorite_rate: 0.3,
            removal_rate: 0.4,
            ..Default::default()
        };
        let summary = generate(
            &[],
            &[],
            &TravelStyle::default(),
            &patterns,
            &InferenceConfig::default(),
        );
        assert!(!summary.contains(ENGAGED_CLAUSE));
        assert!(!summary.contains(SELECTIVE_CLAUSE));
    }
}
