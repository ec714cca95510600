//! Static lookup tables driving the extractors.
//!
//! Matching is plain substring containment on lower-cased text, so a
//! keyword can fire on an unrelated word that contains it.

use wayfarer_core::taxonomy::{AvoidanceCategory, InterestCategory, PlaceType};

use InterestCategory::*;

/// Place type → interest categories a favorite of that type supports.
pub const PLACE_TYPE_INTERESTS: &[(PlaceType, &[InterestCategory])] = &[
    (PlaceType::Restaurant, &[Foodie]),
    (PlaceType::Cafe, &[Foodie]),
    (PlaceType::Bar, &[Nightlife, Foodie]),
    (PlaceType::Nightclub, &[Nightlife]),
    (PlaceType::Museum, &[CultureBuff]),
    (PlaceType::ArtGallery, &[ArtLover, CultureBuff]),
    (PlaceType::HistoricSite, &[CultureBuff]),
    (PlaceType::Landmark, &[CultureBuff, Photographer]),
    (PlaceType::Park, &[NatureLover]),
    (PlaceType::NaturalFeature, &[NatureLover, Photographer]),
    (PlaceType::Beach, &[BeachPerson, Relaxation]),
    (PlaceType::HikingTrail, &[AdventureSeeker, NatureLover]),
    (PlaceType::ShoppingMall, &[Shopper]),
    (PlaceType::Market, &[Shopper, Foodie]),
    (PlaceType::Spa, &[Relaxation]),
    (PlaceType::AmusementPark, &[AdventureSeeker]),
    (PlaceType::Viewpoint, &[Photographer]),
];

/// Content keyword → interest categories, matched against trip cities.
pub const CONTENT_KEYWORDS: &[(&str, &[InterestCategory])] = &[
    ("beach", &[BeachPerson]),
    ("coast", &[BeachPerson]),
    ("island", &[BeachPerson, Relaxation]),
    ("mountain", &[NatureLover, AdventureSeeker]),
    ("hiking", &[AdventureSeeker, NatureLover]),
    ("adventure", &[AdventureSeeker]),
    ("national park", &[NatureLover]),
    ("lake", &[NatureLover]),
    ("historic", &[CultureBuff]),
    ("ancient", &[CultureBuff]),
    ("castle", &[CultureBuff]),
    ("museum", &[CultureBuff, ArtLover]),
    ("gallery", &[ArtLover]),
    ("food", &[Foodie]),
    ("cuisine", &[Foodie]),
    ("wine", &[Foodie]),
    ("nightlife", &[Nightlife]),
    ("shopping", &[Shopper]),
    ("thermal", &[Relaxation]),
    ("hot spring", &[Relaxation]),
    ("scenic", &[Photographer]),
];

/// Keyword found in a removed city → avoidance category.
pub const AVOIDANCE_KEYWORDS: &[(&str, AvoidanceCategory)] = &[
    ("mountain", AvoidanceCategory::Hiking),
    ("hiking", AvoidanceCategory::Hiking),
    ("trek", AvoidanceCategory::Hiking),
    ("alpine", AvoidanceCategory::Hiking),
    ("touristy", AvoidanceCategory::Crowds),
    ("crowded", AvoidanceCategory::Crowds),
    ("beach", AvoidanceCategory::Beaches),
    ("coast", AvoidanceCategory::Beaches),
    ("nightlife", AvoidanceCategory::Nightlife),
    ("party", AvoidanceCategory::Nightlife),
    ("museum", AvoidanceCategory::Museums),
    ("metropolis", AvoidanceCategory::BigCities),
    ("skyscraper", AvoidanceCategory::BigCities),
    ("snow", AvoidanceCategory::ColdWeather),
    ("glacier", AvoidanceCategory::ColdWeather),
    ("arctic", AvoidanceCategory::ColdWeather),
];

/// Interest categories for a place type; empty when unmapped.
pub fn interests_for_place_type(place_type: PlaceType) -> &'static [InterestCategory] {
    PLACE_TYPE_INTERESTS
        .iter()
        .find(|(pt, _)| *pt == place_type)
        .map(|(_, categories)| *categories)
        .unwrap_or(&[])
}
