use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Something the user appears to want to avoid. Disjoint from
/// [`InterestCategory`](super::InterestCategory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AvoidanceCategory {
    Hiking,
    Crowds,
    Beaches,
    Nightlife,
    Museums,
    BigCities,
    ColdWeather,
}

impl AvoidanceCategory {
    /// Total number of avoidance categories.
    pub const COUNT: usize = 7;

    /// All variants for iteration.
    pub const ALL: [AvoidanceCategory; 7] = [
        Self::Hiking,
        Self::Crowds,
        Self::Beaches,
        Self::Nightlife,
        Self::Museums,
        Self::BigCities,
        Self::ColdWeather,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hiking => "hiking",
            Self::Crowds => "crowds",
            Self::Beaches => "beaches",
            Self::Nightlife => "nightlife",
            Self::Museums => "museums",
            Self::BigCities => "big_cities",
            Self::ColdWeather => "cold_weather",
        }
    }
}

impl std::fmt::Display for AvoidanceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
