use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Travel-preference bucket the engine can infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InterestCategory {
    Foodie,
    CultureBuff,
    NatureLover,
    AdventureSeeker,
    BeachPerson,
    Nightlife,
    Shopper,
    ArtLover,
    Relaxation,
    Photographer,
}

impl InterestCategory {
    /// Total number of interest categories.
    pub const COUNT: usize = 10;

    /// All variants for iteration.
    pub const ALL: [InterestCategory; 10] = [
        Self::Foodie,
        Self::CultureBuff,
        Self::NatureLover,
        Self::AdventureSeeker,
        Self::BeachPerson,
        Self::Nightlife,
        Self::Shopper,
        Self::ArtLover,
        Self::Relaxation,
        Self::Photographer,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foodie => "foodie",
            Self::CultureBuff => "culture_buff",
            Self::NatureLover => "nature_lover",
            Self::AdventureSeeker => "adventure_seeker",
            Self::BeachPerson => "beach_person",
            Self::Nightlife => "nightlife",
            Self::Shopper => "shopper",
            Self::ArtLover => "art_lover",
            Self::Relaxation => "relaxation",
            Self::Photographer => "photographer",
        }
    }
}

impl std::fmt::Display for InterestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
