use media_tracker_models::{FilterCriteria, FilterMode, MediaItem, MediaKind, MovieStatus, TvShowStatus};
use tracing::{debug, info, warn};

use crate::error::{Result, TrackerError};
use crate::filter::{filter_items, matches_keyword};

/// In-memory, insertion-ordered collection of movies and TV shows.
///
/// Titles are not unique; every title-based operation acts on the first
/// case-insensitive match.
#[derive(Debug, Default)]
pub struct MediaTracker {
    items: Vec<MediaItem>,
    filter_mode: FilterMode,
}

impl MediaTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_mode(filter_mode: FilterMode) -> Self {
        Self {
            items: Vec::new(),
            filter_mode,
        }
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn add(&mut self, item: impl Into<MediaItem>) {
        let item = item.into();
        info!(
            operation = "add",
            kind = %item.kind(),
            title = %item.title(),
            "Added media item"
        );
        self.items.push(item);
    }

    /// All tracked items in insertion order
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_title(&self, title: &str) -> Option<&MediaItem> {
        let found = self.items.iter().find(|item| title_matches(item, title));
        debug!(title = %title, found = found.is_some(), "find_by_title");
        found
    }

    fn find_by_title_mut(&mut self, title: &str) -> Result<&mut MediaItem> {
        self.items
            .iter_mut()
            .find(|item| title_matches(item, title))
            .ok_or_else(|| TrackerError::NotFound { title: title.to_string() })
    }

    pub fn update_movie_status(&mut self, title: &str, status: MovieStatus) -> Result<()> {
        let item = self.find_by_title_mut(title)?;
        let kind = item.kind();
        let movie = item.as_movie_mut().ok_or_else(|| TrackerError::WrongKind {
            title: title.to_string(),
            expected: MediaKind::Movie,
            actual: kind,
        })?;

        movie.set_status(status);
        info!(operation = "update_status", title = %title, status = %status, "Updated movie status");
        Ok(())
    }

    /// Update a show's status and episode count together. A rejected
    /// episode count leaves both fields untouched.
    pub fn update_tv_show_status(&mut self, title: &str, status: TvShowStatus, episodes_watched: i32) -> Result<()> {
        let item = self.find_by_title_mut(title)?;
        let kind = item.kind();
        let show = item.as_tv_show_mut().ok_or_else(|| TrackerError::WrongKind {
            title: title.to_string(),
            expected: MediaKind::TvShow,
            actual: kind,
        })?;

        if let Err(e) = show.set_episodes_watched(episodes_watched) {
            warn!(operation = "update_status", title = %title, error = %e, "Rejected TV show update");
            return Err(e.into());
        }
        show.set_status(status);

        info!(
            operation = "update_status",
            title = %title,
            status = %status,
            episodes_watched = episodes_watched,
            "Updated TV show status"
        );
        Ok(())
    }

    /// Rate an item that is in its terminal watched state
    pub fn rate(&mut self, title: &str, rating: i32) -> Result<()> {
        let item = self.find_by_title_mut(title)?;
        if !item.is_watched() {
            warn!(operation = "rate", title = %title, status = %item.status(), "Rejected rating for unwatched item");
            return Err(TrackerError::NotWatched { title: title.to_string() });
        }

        if let Err(e) = item.details_mut().set_rating(rating) {
            warn!(operation = "rate", title = %title, error = %e, "Rejected rating");
            return Err(e.into());
        }

        info!(operation = "rate", title = %title, rating = rating, "Rated media item");
        Ok(())
    }

    /// Items whose title or genre contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<&MediaItem> {
        let results: Vec<&MediaItem> = self.items.iter().filter(|item| matches_keyword(item, keyword)).collect();
        debug!(keyword = %keyword, result_count = results.len(), "search");
        results
    }

    /// Filter with the tracker's configured mode
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&MediaItem> {
        self.filter_with_mode(criteria, self.filter_mode)
    }

    pub fn filter_with_mode(&self, criteria: &FilterCriteria, mode: FilterMode) -> Vec<&MediaItem> {
        filter_items(&self.items, criteria, mode)
    }
}

fn title_matches(item: &MediaItem, title: &str) -> bool {
    item.title().to_lowercase() == title.to_lowercase()
}

#[cfg(test)]
mod tests;
