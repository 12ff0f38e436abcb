use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Watch status of a movie
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovieStatus {
    /// The movie has been fully watched
    Watched,
    /// The movie is planned to be watched
    ToWatch,
}

/// Overall watch status of a TV show
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TvShowStatus {
    /// Currently watching
    Watching,
    /// Finished all available episodes
    Completed,
    /// Planned to be watched
    ToWatch,
}

/// Status of either variant, used where the caller does not know the
/// concrete kind of the item it is updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Movie(MovieStatus),
    TvShow(TvShowStatus),
}

impl MovieStatus {
    pub const ALL: &'static [MovieStatus] = &[Self::Watched, Self::ToWatch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watched => "WATCHED",
            Self::ToWatch => "TO_WATCH",
        }
    }

    /// Terminal state that allows rating
    pub fn is_watched(&self) -> bool {
        matches!(self, Self::Watched)
    }
}

impl TvShowStatus {
    pub const ALL: &'static [TvShowStatus] = &[Self::Watching, Self::Completed, Self::ToWatch];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watching => "WATCHING",
            Self::Completed => "COMPLETED",
            Self::ToWatch => "TO_WATCH",
        }
    }

    /// Terminal state that allows rating
    pub fn is_watched(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie(status) => status.as_str(),
            Self::TvShow(status) => status.as_str(),
        }
    }

    pub fn is_watched(&self) -> bool {
        match self {
            Self::Movie(status) => status.is_watched(),
            Self::TvShow(status) => status.is_watched(),
        }
    }
}

impl From<MovieStatus> for Status {
    fn from(status: MovieStatus) -> Self {
        Status::Movie(status)
    }
}

impl From<TvShowStatus> for Status {
    fn from(status: TvShowStatus) -> Self {
        Status::TvShow(status)
    }
}

/// Normalize free-form status text to the canonical label form
/// ("to watch", "To-Watch" -> "TO_WATCH").
fn normalize_label(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

impl FromStr for MovieStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalize_label(s);
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| ValidationError::UnknownStatus { input: s.trim().to_string() })
    }
}

impl FromStr for TvShowStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = normalize_label(s);
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| ValidationError::UnknownStatus { input: s.trim().to_string() })
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TvShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
