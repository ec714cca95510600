use std::collections::BTreeMap;

use tracing::{debug, trace};
use wayfarer_core::models::{InterestSignal, SignalSource};
use wayfarer_core::taxonomy::{InterestCategory, PlaceType};

use super::Tally;
use crate::tables;

/// Favorite-based interest extractor.
///
/// Infers what kinds of places the user likes from per-place-type favorite
/// counts. A place type may support several categories; each category's
/// confidence is `min(1, favorites mapped to it / saturation)`.
pub struct FavoritesExtractor;

impl FavoritesExtractor {
    /// Extract interest signals from favorite counts.
    ///
    /// `total_favorites` is informational only and is logged, not weighted.
    pub fn extract(
        favorite_counts: &BTreeMap<PlaceType, u32>,
        total_favorites: u32,
        saturation: f64,
    ) -> Vec<InterestSignal> {
        let mut tally: Tally<InterestCategory> = Tally::new();

        for (place_type, &count) in favorite_counts {
            if count == 0 {
                continue;
            }
            let categories = tables::interests_for_place_type(*place_type);
            if categories.is_empty() {
                trace!(place_type = ?place_type, count, "unmapped place type ignored");
                continue;
            }
            let line = format!("Favorited {count} {}(s)", place_type.noun());
            for &category in categories {
                tally.add(category, count, line.clone());
            }
        }

        debug!(
            total_favorites,
            categories = tally.len(),
            "favorite signals extracted"
        );
        tally.into_signals(SignalSource::Favorites, saturation)
    }
}
