use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::action::search_text;

/// A city on the current trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TripCity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TripCity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Lower-cased name + description used for keyword matching.
    pub fn search_text(&self) -> String {
        search_text(Some(self.name.as_str()), self.description.as_deref())
    }
}

/// Current trip: origin, selected intermediate stops, destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct TripRoute {
    pub origin: Option<TripCity>,
    pub stops: Vec<TripCity>,
    pub destination: Option<TripCity>,
}

impl TripRoute {
    /// Cities in trip order: origin, stops, destination.
    pub fn cities(&self) -> impl Iterator<Item = &TripCity> {
        self.origin
            .iter()
            .chain(self.stops.iter())
            .chain(self.destination.iter())
    }

    /// Number of cities on the route.
    pub fn len(&self) -> usize {
        self.cities().count()
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.stops.is_empty() && self.destination.is_none()
    }

    /// Find a city anywhere on the route by ID.
    pub fn find(&self, city_id: &str) -> Option<&TripCity> {
        self.cities().find(|c| c.id == city_id)
    }
}
