use tracing::debug;
use wayfarer_core::models::{InterestSignal, SignalSource, TripRoute};
use wayfarer_core::taxonomy::InterestCategory;

use super::{first_unit, Tally};
use crate::tables::CONTENT_KEYWORDS;

/// Content-keyword interest extractor.
///
/// Scans every city on the trip for keywords from a fixed table. Each city
/// counts at most once per category; every keyword hit is kept as
/// provenance. Confidence is `min(1, matching cities / saturation)`.
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn extract(route: &TripRoute, saturation: f64) -> Vec<InterestSignal> {
        let mut tally: Tally<InterestCategory> = Tally::new();
        let mut scanned = 0usize;

        for city in route.cities() {
            scanned += 1;
            let text = city.search_text();
            let mut seen = Vec::new();
            for (keyword, categories) in CONTENT_KEYWORDS {
                if !text.contains(keyword) {
                    continue;
                }
                for &category in *categories {
                    let units = first_unit(&mut seen, category);
                    tally.add(category, units, format!("{} mentions \"{keyword}\"", city.name));
                }
            }
        }

        debug!(
            cities = scanned,
            categories = tally.len(),
            "content signals extracted"
        );
        tally.into_signals(SignalSource::Content, saturation)
    }
}
