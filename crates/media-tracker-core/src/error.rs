use media_tracker_models::{MediaKind, ValidationError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("media item with title '{title}' not found")]
    NotFound { title: String },

    #[error("'{title}' is a {actual}, not a {expected}")]
    WrongKind {
        title: String,
        expected: MediaKind,
        actual: MediaKind,
    },

    #[error("'{title}' must be watched or completed before it can be rated")]
    NotWatched { title: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
