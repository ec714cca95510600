use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::taxonomy::PlaceType;

/// Kind of discrete user action observed during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    PlaceFavorited,
    PlaceUnfavorited,
    CityAdded,
    CityRemoved,
    CityPreviewViewed,
}

impl ActionType {
    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlaceFavorited => "place_favorited",
            Self::PlaceUnfavorited => "place_unfavorited",
            Self::CityAdded => "city_added",
            Self::CityRemoved => "city_removed",
            Self::CityPreviewViewed => "city_preview_viewed",
        }
    }
}

/// One immutable entry in the action log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Action {
    pub action_type: ActionType,
    /// ID of the place or city acted upon.
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_type: Option<PlaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// Free-text description of the city, when the action targets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Action {
    /// The user marked a point of interest as liked.
    pub fn place_favorited(
        target_id: impl Into<String>,
        place_type: PlaceType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            action_type: ActionType::PlaceFavorited,
            target_id: target_id.into(),
            place_type: Some(place_type),
            city_name: None,
            city_description: None,
            timestamp,
        }
    }

    /// The user withdrew a previous favorite.
    pub fn place_unfavorited(
        target_id: impl Into<String>,
        place_type: PlaceType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            action_type: ActionType::PlaceUnfavorited,
            ..Self::place_favorited(target_id, place_type, timestamp)
        }
    }

    /// A city was added to the trip.
    pub fn city_added(
        target_id: impl Into<String>,
        city_name: impl Into<String>,
        city_description: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::city_action(
            ActionType::CityAdded,
            target_id.into(),
            city_name.into(),
            city_description,
            timestamp,
        )
    }

    /// A candidate city was removed from the trip.
    pub fn city_removed(
        target_id: impl Into<String>,
        city_name: impl Into<String>,
        city_description: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::city_action(
            ActionType::CityRemoved,
            target_id.into(),
            city_name.into(),
            city_description,
            timestamp,
        )
    }

    /// The user opened the preview card of a suggested city.
    pub fn city_preview_viewed(
        target_id: impl Into<String>,
        city_name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::city_action(
            ActionType::CityPreviewViewed,
            target_id.into(),
            city_name.into(),
            None,
            timestamp,
        )
    }

    fn city_action(
        action_type: ActionType,
        target_id: String,
        city_name: String,
        city_description: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            action_type,
            target_id,
            place_type: None,
            city_name: Some(city_name),
            city_description,
            timestamp,
        }
    }

    /// Check the action kind.
    pub fn is(&self, action_type: ActionType) -> bool {
        self.action_type == action_type
    }

    /// Lower-cased city name and description, joined by a space.
    /// Empty when the action carries no city content.
    pub fn city_search_text(&self) -> String {
        search_text(self.city_name.as_deref(), self.city_description.as_deref())
    }
}

/// Lower-case and join a name and optional description for keyword scanning.
pub(crate) fn search_text(name: Option<&str>, description: Option<&str>) -> String {
    let mut text = name.unwrap_or_default().to_lowercase();
    if let Some(description) = description {
        text.push(' ');
        text.push_str(&description.to_lowercase());
    }
    text
}
