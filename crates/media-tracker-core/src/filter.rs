// Matching logic behind MediaTracker::search and MediaTracker::filter

use media_tracker_models::{FilterCriteria, FilterField, FilterMode, MediaItem};
use tracing::debug;

/// Case-insensitive substring match against title or genre
pub fn matches_keyword(item: &MediaItem, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    item.title().to_lowercase().contains(&keyword) || item.genre().to_lowercase().contains(&keyword)
}

/// Match a single criteria entry against an item.
///
/// Genre is a substring match; status and platform must match exactly.
/// All comparisons ignore case.
pub fn matches_field(item: &MediaItem, field: FilterField, value: &str) -> bool {
    let value = value.to_lowercase();
    match field {
        FilterField::Status => item.status().as_str().to_lowercase() == value,
        FilterField::Genre => item.genre().to_lowercase().contains(&value),
        FilterField::Platform => item.platform().to_lowercase() == value,
    }
}

/// Criteria with no recognized entries match every item.
pub fn matches_criteria(item: &MediaItem, criteria: &FilterCriteria, mode: FilterMode) -> bool {
    let mut recognized = criteria.recognized();
    match mode {
        FilterMode::FirstRecognized => recognized
            .next()
            .map(|(field, value)| matches_field(item, field, value))
            .unwrap_or(true),
        FilterMode::All => recognized.all(|(field, value)| matches_field(item, field, value)),
    }
}

pub fn filter_items<'a>(items: &'a [MediaItem], criteria: &FilterCriteria, mode: FilterMode) -> Vec<&'a MediaItem> {
    let filtered: Vec<&MediaItem> = items
        .iter()
        .filter(|item| matches_criteria(item, criteria, mode))
        .collect();

    debug!(
        "filter_items: source_count={}, criteria_count={}, mode={:?}, result_count={}",
        items.len(),
        criteria.len(),
        mode,
        filtered.len()
    );

    filtered
}
