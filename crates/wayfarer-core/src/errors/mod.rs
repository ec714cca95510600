//! Error handling for Wayfarer.
//! One error enum per subsystem, `thiserror` only.
//!
//! The inference path itself is infallible; errors only arise while
//! loading configuration, maintaining a discovery session, or serializing
//! a finished profile.

pub mod config_error;
pub mod session_error;

pub use config_error::ConfigError;
pub use session_error::SessionError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum WayfarerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type WayfarerResult<T> = Result<T, WayfarerError>;
