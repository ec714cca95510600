//! Human-readable labels for categories, usable independently by UI layers.

use super::{AvoidanceCategory, InterestCategory};

/// Display label for an interest category.
pub fn interest_label(category: InterestCategory) -> &'static str {
    match category {
        InterestCategory::Foodie => "Food & Dining",
        InterestCategory::CultureBuff => "Culture & History",
        InterestCategory::NatureLover => "Nature & Outdoors",
        InterestCategory::AdventureSeeker => "Adventure",
        InterestCategory::BeachPerson => "Beaches",
        InterestCategory::Nightlife => "Nightlife",
        InterestCategory::Shopper => "Shopping",
        InterestCategory::ArtLover => "Art",
        InterestCategory::Relaxation => "Relaxation & Wellness",
        InterestCategory::Photographer => "Photography",
    }
}

/// Display label for an avoidance category.
pub fn avoidance_label(category: AvoidanceCategory) -> &'static str {
    match category {
        AvoidanceCategory::Hiking => "Hiking & strenuous activities",
        AvoidanceCategory::Crowds => "Crowded tourist spots",
        AvoidanceCategory::Beaches => "Beach destinations",
        AvoidanceCategory::Nightlife => "Nightlife & parties",
        AvoidanceCategory::Museums => "Museums",
        AvoidanceCategory::BigCities => "Big cities",
        AvoidanceCategory::ColdWeather => "Cold weather",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_interest_has_a_distinct_label() {
        let mut labels: Vec<_> = InterestCategory::ALL.iter().map(|c| interest_label(*c)).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), InterestCategory::COUNT);
    }

    #[test]
    fn every_avoidance_has_a_distinct_label() {
        let mut labels: Vec<_> = AvoidanceCategory::ALL
            .iter()
            .map(|c| avoidance_label(*c))
            .collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), AvoidanceCategory::COUNT);
    }

    #[test]
    fn foodie_label() {
        assert_eq!(interest_label(InterestCategory::Foodie), "Food & Dining");
    }

    #[test]
    fn crowds_label() {
        assert_eq!(avoidance_label(AvoidanceCategory::Crowds), "Crowded tourist spots");
    }
}
