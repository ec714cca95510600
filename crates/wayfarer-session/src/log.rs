//! ActionLog: ordered, append-only record of discovery actions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wayfarer_core::errors::SessionError;
use wayfarer_core::models::Action;
use wayfarer_observability::events;

/// Actions in non-decreasing timestamp order. Entries are never edited or
/// removed once appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action. Equal timestamps are accepted; an action older
    /// than the last entry is rejected and the log is left unchanged.
    pub fn append(&mut self, action: Action) -> Result<(), SessionError> {
        if let Some(last) = self.last_timestamp() {
            if action.timestamp < last {
                events::action_rejected(action.action_type.as_str(), "out of order");
                return Err(SessionError::OutOfOrderAction {
                    attempted: action.timestamp,
                    last,
                });
            }
        }
        self.actions.push(action);
        Ok(())
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Timestamp of the most recent entry.
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.actions.last().map(|a| a.timestamp)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
