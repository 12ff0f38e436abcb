use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::rating::Rating;
use crate::status::{MovieStatus, Status, TvShowStatus};

/// Fields shared by every tracked title
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaDetails {
    pub title: String,
    pub genre: String,
    pub platform: String,
    rating: Rating,
    pub added_at: DateTime<Utc>,
}

impl MediaDetails {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            platform: platform.into(),
            rating: Rating::UNRATED,
            added_at: Utc::now(),
        }
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Set the rating; values outside 0-5 are rejected and leave the
    /// current rating in place.
    pub fn set_rating(&mut self, value: i32) -> Result<(), ValidationError> {
        self.rating = Rating::new(value)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(flatten)]
    pub details: MediaDetails,
    pub release_year: i32,
    pub status: MovieStatus,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        release_year: i32,
        status: MovieStatus,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            details: MediaDetails::new(title, genre, platform),
            release_year,
            status,
        }
    }

    pub fn set_status(&mut self, status: MovieStatus) {
        self.status = status;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TvShow {
    #[serde(flatten)]
    pub details: MediaDetails,
    pub first_release_year: i32,
    pub overall_status: TvShowStatus,
    pub number_of_seasons: u32,
    episodes_watched: u32,
}

impl TvShow {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        first_release_year: i32,
        overall_status: TvShowStatus,
        platform: impl Into<String>,
        number_of_seasons: u32,
        episodes_watched: u32,
    ) -> Self {
        Self {
            details: MediaDetails::new(title, genre, platform),
            first_release_year,
            overall_status,
            number_of_seasons,
            episodes_watched,
        }
    }

    pub fn episodes_watched(&self) -> u32 {
        self.episodes_watched
    }

    pub fn set_status(&mut self, status: TvShowStatus) {
        self.overall_status = status;
    }

    /// Negative counts are rejected and leave the current count in place.
    pub fn set_episodes_watched(&mut self, value: i32) -> Result<(), ValidationError> {
        self.episodes_watched = u32::try_from(value).map_err(|_| ValidationError::NegativeEpisodes { value })?;
        Ok(())
    }
}

/// The two kinds of trackable media
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    TvShow,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaItem {
    Movie(Movie),
    TvShow(TvShow),
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Movie(_) => MediaKind::Movie,
            Self::TvShow(_) => MediaKind::TvShow,
        }
    }

    pub fn details(&self) -> &MediaDetails {
        match self {
            Self::Movie(movie) => &movie.details,
            Self::TvShow(show) => &show.details,
        }
    }

    pub fn details_mut(&mut self) -> &mut MediaDetails {
        match self {
            Self::Movie(movie) => &mut movie.details,
            Self::TvShow(show) => &mut show.details,
        }
    }

    pub fn title(&self) -> &str {
        &self.details().title
    }

    pub fn genre(&self) -> &str {
        &self.details().genre
    }

    pub fn platform(&self) -> &str {
        &self.details().platform
    }

    pub fn rating(&self) -> Rating {
        self.details().rating()
    }

    /// Release year for movies, first release year for shows
    pub fn year(&self) -> i32 {
        match self {
            Self::Movie(movie) => movie.release_year,
            Self::TvShow(show) => show.first_release_year,
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Movie(movie) => Status::Movie(movie.status),
            Self::TvShow(show) => Status::TvShow(show.overall_status),
        }
    }

    /// Whether the item is in its terminal watched state (WATCHED or COMPLETED)
    pub fn is_watched(&self) -> bool {
        self.status().is_watched()
    }

    /// Apply a status of either kind. A status belonging to the other
    /// variant is rejected and the current status is kept.
    pub fn set_status(&mut self, status: Status) -> Result<(), ValidationError> {
        match (self, status) {
            (Self::Movie(movie), Status::Movie(status)) => {
                movie.set_status(status);
                Ok(())
            }
            (Self::TvShow(show), Status::TvShow(status)) => {
                show.set_status(status);
                Ok(())
            }
            (item, status) => Err(ValidationError::StatusMismatch {
                expected: item.kind().as_str(),
                actual: match status {
                    Status::Movie(_) => MediaKind::Movie.as_str(),
                    Status::TvShow(_) => MediaKind::TvShow.as_str(),
                },
            }),
        }
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            Self::Movie(movie) => Some(movie),
            Self::TvShow(_) => None,
        }
    }

    pub fn as_movie_mut(&mut self) -> Option<&mut Movie> {
        match self {
            Self::Movie(movie) => Some(movie),
            Self::TvShow(_) => None,
        }
    }

    pub fn as_tv_show(&self) -> Option<&TvShow> {
        match self {
            Self::TvShow(show) => Some(show),
            Self::Movie(_) => None,
        }
    }

    pub fn as_tv_show_mut(&mut self) -> Option<&mut TvShow> {
        match self {
            Self::TvShow(show) => Some(show),
            Self::Movie(_) => None,
        }
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<TvShow> for MediaItem {
    fn from(show: TvShow) -> Self {
        MediaItem::TvShow(show)
    }
}

impl fmt::Display for MediaDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Genre: {}, Platform: {}, Rating: {}",
            self.title, self.genre, self.platform, self.rating
        )
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie(movie) => write!(
                f,
                "Movie - {}, Release Year: {}, Status: {}",
                movie.details, movie.release_year, movie.status
            ),
            Self::TvShow(show) => write!(
                f,
                "TV Show - {}, First Release Year: {}, Overall Status: {}, Seasons: {}, Episodes Watched: {}",
                show.details,
                show.first_release_year,
                show.overall_status,
                show.number_of_seasons,
                show.episodes_watched
            ),
        }
    }
}
