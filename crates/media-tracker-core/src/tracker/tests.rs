use super::*;
use media_tracker_models::{Movie, Rating, Status, TvShow, ValidationError};

fn create_movie(title: &str, genre: &str, status: MovieStatus) -> Movie {
    Movie::new(title, genre, 2010, status, "Netflix")
}

fn create_show(title: &str, genre: &str, status: TvShowStatus, episodes_watched: u32) -> TvShow {
    TvShow::new(title, genre, 2015, status, "Hulu", 3, episodes_watched)
}

fn sample_tracker() -> MediaTracker {
    let mut tracker = MediaTracker::new();
    tracker.add(create_movie("Heat", "Action", MovieStatus::Watched));
    tracker.add(create_show("Active Duty", "Comedy", TvShowStatus::Watching, 4));
    tracker.add(create_movie("Arrival", "Sci-Fi Drama", MovieStatus::ToWatch));
    tracker.add(create_show("The Wire", "Crime Drama", TvShowStatus::Completed, 60));
    tracker
}

fn titles(items: &[&MediaItem]) -> Vec<String> {
    items.iter().map(|item| item.title().to_string()).collect()
}

#[test]
fn test_empty_tracker() {
    let tracker = MediaTracker::new();
    assert!(tracker.is_empty());
    assert_eq!(tracker.len(), 0);
    assert!(tracker.items().is_empty());
    assert!(tracker.search("").is_empty());
}

#[test]
fn test_add_keeps_insertion_order() {
    let tracker = sample_tracker();
    let all: Vec<&MediaItem> = tracker.items().iter().collect();
    assert_eq!(titles(&all), vec!["Heat", "Active Duty", "Arrival", "The Wire"]);
}

#[test]
fn test_add_allows_duplicate_titles() {
    let mut tracker = MediaTracker::new();
    tracker.add(create_movie("Heat", "Action", MovieStatus::Watched));
    tracker.add(create_movie("Heat", "Thriller", MovieStatus::ToWatch));
    assert_eq!(tracker.len(), 2);
}

#[test]
fn test_find_by_title_is_case_insensitive() {
    let tracker = sample_tracker();
    let item = tracker.find_by_title("tHE wIRE").unwrap();
    assert_eq!(item.title(), "The Wire");
    assert!(tracker.find_by_title("The Wir").is_none());
    assert!(tracker.find_by_title("Missing").is_none());
}

#[test]
fn test_find_by_title_returns_first_duplicate() {
    let mut tracker = MediaTracker::new();
    tracker.add(create_movie("Heat", "Action", MovieStatus::Watched));
    tracker.add(create_movie("HEAT", "Thriller", MovieStatus::ToWatch));

    let item = tracker.find_by_title("heat").unwrap();
    assert_eq!(item, &tracker.items()[0]);
    assert_eq!(item.genre(), "Action");
}

#[test]
fn test_update_movie_status() {
    let mut tracker = sample_tracker();
    tracker.update_movie_status("arrival", MovieStatus::Watched).unwrap();
    assert_eq!(
        tracker.find_by_title("Arrival").unwrap().status(),
        Status::Movie(MovieStatus::Watched)
    );
}

#[test]
fn test_update_movie_status_not_found() {
    let mut tracker = sample_tracker();
    let err = tracker.update_movie_status("Missing", MovieStatus::Watched).unwrap_err();
    assert_eq!(err, TrackerError::NotFound { title: "Missing".to_string() });
}

#[test]
fn test_update_movie_status_on_show_fails() {
    let mut tracker = sample_tracker();
    let err = tracker.update_movie_status("Active Duty", MovieStatus::Watched).unwrap_err();
    assert_eq!(
        err,
        TrackerError::WrongKind {
            title: "Active Duty".to_string(),
            expected: MediaKind::Movie,
            actual: MediaKind::TvShow,
        }
    );
    assert_eq!(
        tracker.find_by_title("Active Duty").unwrap().status(),
        Status::TvShow(TvShowStatus::Watching)
    );
}

#[test]
fn test_update_tv_show_status() {
    let mut tracker = sample_tracker();
    tracker.update_tv_show_status("Active Duty", TvShowStatus::Completed, 20).unwrap();

    let show = tracker.find_by_title("Active Duty").unwrap().as_tv_show().unwrap();
    assert_eq!(show.overall_status, TvShowStatus::Completed);
    assert_eq!(show.episodes_watched(), 20);
}

#[test]
fn test_update_tv_show_status_on_movie_fails() {
    let mut tracker = sample_tracker();
    let err = tracker.update_tv_show_status("Heat", TvShowStatus::Completed, 1).unwrap_err();
    assert!(matches!(err, TrackerError::WrongKind { expected: MediaKind::TvShow, .. }));
}

#[test]
fn test_update_tv_show_negative_episodes_is_rejected() {
    let mut tracker = sample_tracker();
    let err = tracker.update_tv_show_status("Active Duty", TvShowStatus::Completed, -1).unwrap_err();
    assert_eq!(err, TrackerError::Validation(ValidationError::NegativeEpisodes { value: -1 }));

    // Neither field changes
    let show = tracker.find_by_title("Active Duty").unwrap().as_tv_show().unwrap();
    assert_eq!(show.episodes_watched(), 4);
    assert_eq!(show.overall_status, TvShowStatus::Watching);
}

#[test]
fn test_rate_watched_movie() {
    let mut tracker = sample_tracker();
    tracker.rate("heat", 5).unwrap();
    assert_eq!(tracker.find_by_title("Heat").unwrap().rating(), Rating::new(5).unwrap());
}

#[test]
fn test_rate_completed_show() {
    let mut tracker = sample_tracker();
    tracker.rate("The Wire", 4).unwrap();
    assert_eq!(tracker.find_by_title("The Wire").unwrap().rating().value(), 4);
}

#[test]
fn test_rate_requires_terminal_state() {
    let mut tracker = sample_tracker();

    let err = tracker.rate("Arrival", 3).unwrap_err();
    assert_eq!(err, TrackerError::NotWatched { title: "Arrival".to_string() });
    assert!(!tracker.find_by_title("Arrival").unwrap().rating().is_rated());

    let err = tracker.rate("Active Duty", 3).unwrap_err();
    assert!(matches!(err, TrackerError::NotWatched { .. }));
    assert!(!tracker.find_by_title("Active Duty").unwrap().rating().is_rated());
}

#[test]
fn test_rate_missing_item() {
    let mut tracker = sample_tracker();
    let err = tracker.rate("Missing", 3).unwrap_err();
    assert!(matches!(err, TrackerError::NotFound { .. }));
}

#[test]
fn test_rate_out_of_range_keeps_previous_rating() {
    let mut tracker = sample_tracker();
    tracker.rate("Heat", 2).unwrap();

    let err = tracker.rate("Heat", 7).unwrap_err();
    assert_eq!(err, TrackerError::Validation(ValidationError::RatingOutOfRange { value: 7 }));
    assert_eq!(tracker.find_by_title("Heat").unwrap().rating().value(), 2);
}

#[test]
fn test_rate_after_status_change() {
    let mut tracker = sample_tracker();
    assert!(tracker.rate("Arrival", 4).is_err());

    tracker.update_movie_status("Arrival", MovieStatus::Watched).unwrap();
    tracker.rate("Arrival", 4).unwrap();
    assert_eq!(tracker.find_by_title("Arrival").unwrap().rating().value(), 4);
}

#[test]
fn test_search_matches_title_and_genre() {
    let tracker = sample_tracker();
    let results = tracker.search("act");
    assert_eq!(titles(&results), vec!["Heat", "Active Duty"]);
}

#[test]
fn test_search_no_match() {
    let tracker = sample_tracker();
    assert!(tracker.search("western").is_empty());
}

#[test]
fn test_filter_by_genre_substring() {
    let tracker = sample_tracker();
    let criteria = FilterCriteria::new().with("genre", "drama");
    assert_eq!(titles(&tracker.filter(&criteria)), vec!["Arrival", "The Wire"]);
}

#[test]
fn test_filter_by_status() {
    let mut tracker = MediaTracker::new();
    tracker.add(create_movie("Heat", "Action", MovieStatus::Watched));
    tracker.add(create_show("Dark", "Drama", TvShowStatus::Watching, 3));

    let criteria = FilterCriteria::new().with("status", "WATCHED");
    assert_eq!(titles(&tracker.filter(&criteria)), vec!["Heat"]);
}

#[test]
fn test_filter_by_platform_is_exact() {
    let tracker = sample_tracker();
    assert_eq!(
        titles(&tracker.filter(&FilterCriteria::new().with("platform", "netflix"))),
        vec!["Heat", "Arrival"]
    );
    assert!(tracker.filter(&FilterCriteria::new().with("platform", "net")).is_empty());
}

#[test]
fn test_filter_empty_criteria_returns_everything() {
    let tracker = sample_tracker();
    assert_eq!(tracker.filter(&FilterCriteria::new()).len(), 4);
}

#[test]
fn test_filter_first_recognized_ignores_later_entries() {
    let tracker = sample_tracker();
    let criteria = FilterCriteria::new()
        .with("genre", "drama")
        .with("platform", "hulu");

    assert_eq!(tracker.filter_mode(), FilterMode::FirstRecognized);
    assert_eq!(titles(&tracker.filter(&criteria)), vec!["Arrival", "The Wire"]);
}

#[test]
fn test_filter_all_mode_requires_every_entry() {
    let mut tracker = MediaTracker::with_filter_mode(FilterMode::All);
    tracker.add(create_movie("Arrival", "Sci-Fi Drama", MovieStatus::ToWatch));
    tracker.add(create_show("The Wire", "Crime Drama", TvShowStatus::Completed, 60));

    let criteria = FilterCriteria::new()
        .with("genre", "drama")
        .with("platform", "hulu");

    assert_eq!(titles(&tracker.filter(&criteria)), vec!["The Wire"]);
    assert_eq!(
        titles(&tracker.filter_with_mode(&criteria, FilterMode::FirstRecognized)),
        vec!["Arrival", "The Wire"]
    );
}
