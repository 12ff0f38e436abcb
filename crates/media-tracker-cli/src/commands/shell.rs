use super::input::{stdin_source, InputClosed, InputSource};
use super::prompts::{prompt_choice, prompt_count, prompt_int, prompt_string};
use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use media_tracker_config::Config;
use media_tracker_core::{MediaTracker, TrackerError};
use media_tracker_models::{FilterCriteria, MediaItem, MediaKind, Movie, MovieStatus, TvShow, TvShowStatus};

/// Run the interactive menu on stdin until the user exits
pub fn run_shell(config: &Config, output: &Output) -> Result<()> {
    tracing::debug!(filter_mode = ?config.tracker.filter_mode, "Shell started");

    let tracker = MediaTracker::with_filter_mode(config.tracker.filter_mode);
    let echo_prompts = output.format() == OutputFormat::Human && !output.is_quiet();
    let mut input = stdin_source(echo_prompts);
    let mut shell = Shell::new(tracker, input.as_mut(), output, config.display.table);
    shell.run()?;

    tracing::debug!(items = shell.tracker().len(), "Shell finished");
    Ok(())
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a> {
    tracker: MediaTracker,
    input: &'a mut dyn InputSource,
    output: &'a Output,
    table: bool,
}

impl<'a> Shell<'a> {
    pub fn new(tracker: MediaTracker, input: &'a mut dyn InputSource, output: &'a Output, table: bool) -> Self {
        Self {
            tracker,
            input,
            output,
            table,
        }
    }

    pub fn tracker(&self) -> &MediaTracker {
        &self.tracker
    }

    /// Menu loop. Returns when the user picks 0 or the input runs out.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu();
            match self.step() {
                Ok(Flow::Continue) => continue,
                Ok(Flow::Exit) => {
                    self.output.info("Exiting application. Goodbye!");
                    return Ok(());
                }
                Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
                    tracing::debug!("Input closed, ending session");
                    self.output.info("Input closed. Goodbye!");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> Result<Flow> {
        let choice = prompt_int(self.input, "Enter your choice", self.output)?;
        match choice {
            1 => self.add_movie()?,
            2 => self.add_tv_show()?,
            3 => self.view_all(),
            4 => self.update_status()?,
            5 => self.rate()?,
            6 => self.search_and_filter()?,
            0 => return Ok(Flow::Exit),
            _ => self.output.error("Invalid choice. Please try again."),
        }
        Ok(Flow::Continue)
    }

    fn display_menu(&self) {
        self.output.println("\n--- Media Tracker Menu ---");
        self.output.println("1. Add a Movie");
        self.output.println("2. Add a TV Show");
        self.output.println("3. View All Media");
        self.output.println("4. Update Media Status");
        self.output.println("5. Rate Media");
        self.output.println("6. Search/Filter Media");
        self.output.println("0. Exit");
        self.output.println("--------------------------");
    }

    fn add_movie(&mut self) -> Result<()> {
        self.output.println("\n--- Add New Movie ---");
        let title = prompt_string(self.input, "Title")?;
        let genre = prompt_string(self.input, "Genre (e.g., Sci-Fi, Drama)")?;
        let release_year = prompt_int(self.input, "Release Year", self.output)?;
        let status = prompt_choice(self.input, "Status", MovieStatus::ALL, self.output)?;
        let platform = prompt_string(self.input, "Platform (e.g., Netflix, Blu-ray)")?;

        self.tracker.add(Movie::new(title, genre, release_year, status, platform));
        self.output.success("Movie added successfully!");
        Ok(())
    }

    fn add_tv_show(&mut self) -> Result<()> {
        self.output.println("\n--- Add New TV Show ---");
        let title = prompt_string(self.input, "Title")?;
        let genre = prompt_string(self.input, "Genre (e.g., Drama, Comedy)")?;
        let first_release_year = prompt_int(self.input, "First Release Year", self.output)?;
        let status = prompt_choice(self.input, "Status", TvShowStatus::ALL, self.output)?;
        let platform = prompt_string(self.input, "Platform (e.g., Hulu, HBO Max)")?;
        let number_of_seasons = prompt_count(self.input, "Number of Seasons", self.output)?;
        let episodes_watched = prompt_count(self.input, "Episodes Watched", self.output)?;

        self.tracker.add(TvShow::new(
            title,
            genre,
            first_release_year,
            status,
            platform,
            number_of_seasons,
            episodes_watched,
        ));
        self.output.success("TV Show added successfully!");
        Ok(())
    }

    fn view_all(&self) {
        self.output.println("\n--- All Tracked Media ---");
        if self.tracker.is_empty() {
            self.output.empty_result("No media items tracked yet.");
            return;
        }
        let items: Vec<&MediaItem> = self.tracker.items().iter().collect();
        self.output.media_list(&items, self.table);
    }

    fn update_status(&mut self) -> Result<()> {
        self.output.println("\n--- Update Media Status ---");
        let title = prompt_string(self.input, "Enter the title of the media to update")?;

        let Some(kind) = self.tracker.find_by_title(&title).map(|item| item.kind()) else {
            self.output.error(format!("Media item with title '{}' not found.", title));
            return Ok(());
        };

        let result = match kind {
            MediaKind::Movie => {
                let status = prompt_choice(self.input, "Enter new status", MovieStatus::ALL, self.output)?;
                self.tracker.update_movie_status(&title, status)
            }
            MediaKind::TvShow => {
                let status = prompt_choice(self.input, "Enter new overall status", TvShowStatus::ALL, self.output)?;
                let episodes_watched = prompt_int(self.input, "Enter new episodes watched", self.output)?;
                self.tracker.update_tv_show_status(&title, status, episodes_watched)
            }
        };

        match (kind, result) {
            (MediaKind::Movie, Ok(())) => self.output.success("Movie status updated successfully!"),
            (MediaKind::TvShow, Ok(())) => self.output.success("TV Show status and episodes updated successfully!"),
            (_, Err(e)) => self.report_failure("Failed to update status", &e),
        }
        Ok(())
    }

    fn rate(&mut self) -> Result<()> {
        self.output.println("\n--- Rate Media ---");
        let title = prompt_string(self.input, "Enter the title of the media to rate")?;

        if self.tracker.find_by_title(&title).is_none() {
            self.output.error(format!("Media item with title '{}' not found.", title));
            return Ok(());
        }

        let rating = prompt_int(self.input, "Enter your rating (1-5)", self.output)?;
        if !(1..=5).contains(&rating) {
            self.output.error("Invalid rating. Rating must be between 1 and 5.");
            return Ok(());
        }

        match self.tracker.rate(&title, rating) {
            Ok(()) => self.output.success("Media item rated successfully!"),
            Err(e) => self.report_failure("Failed to rate media item", &e),
        }
        Ok(())
    }

    fn search_and_filter(&mut self) -> Result<()> {
        self.output.println("\n--- Search/Filter Media ---");
        self.output.println("1. Search by Keyword (Title/Genre)");
        self.output.println("2. Filter by Status");
        self.output.println("3. Filter by Genre");
        self.output.println("4. Filter by Platform");
        let choice = prompt_int(self.input, "Choose an option", self.output)?;

        let results = match choice {
            1 => {
                let keyword = prompt_string(self.input, "Enter keyword")?;
                self.tracker.search(&keyword)
            }
            2 => {
                self.output
                    .println("  (Movie: WATCHED, TO_WATCH / TV Show: WATCHING, COMPLETED, TO_WATCH)");
                let status = prompt_string(self.input, "Enter status")?;
                self.tracker.filter(&FilterCriteria::new().with("status", status))
            }
            3 => {
                let genre = prompt_string(self.input, "Enter genre")?;
                self.tracker.filter(&FilterCriteria::new().with("genre", genre))
            }
            4 => {
                let platform = prompt_string(self.input, "Enter platform")?;
                self.tracker.filter(&FilterCriteria::new().with("platform", platform))
            }
            _ => {
                self.output.error("Invalid filter option.");
                return Ok(());
            }
        };

        self.output.println("\n--- Search/Filter Results ---");
        if results.is_empty() {
            self.output.empty_result("No media found matching your criteria.");
        } else {
            self.output.media_list(&results, self.table);
        }
        Ok(())
    }

    fn report_failure(&self, context: &str, error: &TrackerError) {
        tracing::debug!(error = ?error, "{}", context);
        self.output.error(format!("{}: {}", context, error));
    }
}
