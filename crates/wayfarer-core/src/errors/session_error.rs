use chrono::{DateTime, Utc};

/// Discovery-session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("action at {attempted} precedes last logged action at {last}")]
    OutOfOrderAction {
        attempted: DateTime<Utc>,
        last: DateTime<Utc>,
    },

    #[error("city {city_id} is not part of the current trip")]
    UnknownCity { city_id: String },
}
