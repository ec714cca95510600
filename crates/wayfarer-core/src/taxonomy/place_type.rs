use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Kind of point of interest a user can favorite or dwell on.
///
/// Unknown strings deserialize to [`PlaceType::Other`], which maps to no
/// interest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PlaceType {
    Restaurant,
    Cafe,
    Bar,
    Nightclub,
    Museum,
    ArtGallery,
    HistoricSite,
    Landmark,
    Park,
    NaturalFeature,
    Beach,
    HikingTrail,
    ShoppingMall,
    Market,
    Spa,
    AmusementPark,
    Viewpoint,
    Lodging,
    #[serde(other)]
    Other,
}

impl PlaceType {
    /// All variants for iteration.
    pub const ALL: [PlaceType; 19] = [
        Self::Restaurant,
        Self::Cafe,
        Self::Bar,
        Self::Nightclub,
        Self::Museum,
        Self::ArtGallery,
        Self::HistoricSite,
        Self::Landmark,
        Self::Park,
        Self::NaturalFeature,
        Self::Beach,
        Self::HikingTrail,
        Self::ShoppingMall,
        Self::Market,
        Self::Spa,
        Self::AmusementPark,
        Self::Viewpoint,
        Self::Lodging,
        Self::Other,
    ];

    /// Singular noun used in provenance lines ("Favorited 2 restaurant(s)").
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Bar => "bar",
            Self::Nightclub => "nightclub",
            Self::Museum => "museum",
            Self::ArtGallery => "art gallery",
            Self::HistoricSite => "historic site",
            Self::Landmark => "landmark",
            Self::Park => "park",
            Self::NaturalFeature => "natural feature",
            Self::Beach => "beach",
            Self::HikingTrail => "hiking trail",
            Self::ShoppingMall => "shopping mall",
            Self::Market => "market",
            Self::Spa => "spa",
            Self::AmusementPark => "amusement park",
            Self::Viewpoint => "viewpoint",
            Self::Lodging => "lodging",
            Self::Other => "place",
        }
    }
}
