use clap::ValueEnum;
use comfy_table::{Cell, Table};
use media_tracker_models::MediaItem;
use owo_colors::OwoColorize;
use serde_json::json;
use std::cell::RefCell;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Quiet mode drops decoration (headings, menus, success and info lines).
/// Listings and empty-result notices are always written.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
    out: RefCell<Box<dyn Write>>,
    err: RefCell<Box<dyn Write>>,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self::with_writers(format, quiet, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_writers(format: OutputFormat, quiet: bool, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            format,
            quiet,
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    fn write_out(&self, line: impl std::fmt::Display) {
        let mut out = self.out.borrow_mut();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    fn write_err(&self, line: impl std::fmt::Display) {
        let _ = writeln!(self.err.borrow_mut(), "{}", line);
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                self.write_out(format_args!("{} {}", "✓".green(), msg.as_ref()));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "success",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors should always be shown, even in quiet mode
        match self.format {
            OutputFormat::Human => {
                self.write_err(format_args!("{} {}", "✗".red(), msg.as_ref()));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "error",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                self.write_out(msg.as_ref());
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "info",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }

        match self.format {
            OutputFormat::Human => {
                self.write_out(format_args!("{} {}", "⚠".yellow(), msg.as_ref()));
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "warning",
                    "message": msg.as_ref()
                }));
            }
        }
    }

    /// Section headings and menu lines. Suppressed entirely in JSON modes so
    /// that stdout stays a stream of structured records.
    pub fn println(&self, msg: impl AsRef<str>) {
        if self.quiet || self.format != OutputFormat::Human {
            return;
        }
        self.write_out(msg.as_ref());
    }

    /// Notice that a requested listing came back empty. Shown even in quiet mode.
    pub fn empty_result(&self, msg: impl AsRef<str>) {
        match self.format {
            OutputFormat::Human => self.write_out(msg.as_ref()),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({
                    "type": "media",
                    "count": 0,
                    "items": [],
                    "message": msg.as_ref()
                }));
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    /// Print a list of media items, regardless of quiet mode. Callers
    /// handle the empty case with `empty_result`.
    pub fn media_list(&self, items: &[&MediaItem], as_table: bool) {
        match self.format {
            OutputFormat::Human => {
                if as_table {
                    self.write_out(media_table(items));
                } else {
                    for (i, item) in items.iter().enumerate() {
                        self.write_out(format_args!("{}. {}", i + 1, item));
                    }
                }
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let data = serde_json::to_value(items).unwrap_or_default();
                self.print_json(&json!({
                    "type": "media",
                    "count": items.len(),
                    "items": data
                }));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                self.write_out(serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                self.write_out(serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                self.write_out(data);
            }
        }
    }
}

pub fn media_table(items: &[&MediaItem]) -> Table {
    let mut table = Table::new();
    table.set_header(
        ["#", "Kind", "Title", "Genre", "Platform", "Year", "Status", "Seasons", "Episodes", "Rating", "Added"]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(comfy_table::Attribute::Bold))
            .collect::<Vec<Cell>>(),
    );

    for (i, item) in items.iter().enumerate() {
        let (seasons, episodes) = match item.as_tv_show() {
            Some(show) => (show.number_of_seasons.to_string(), show.episodes_watched().to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        let status_cell = if item.is_watched() {
            Cell::new(item.status()).fg(comfy_table::Color::Green)
        } else {
            Cell::new(item.status())
        };

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(item.kind()),
            Cell::new(item.title()),
            Cell::new(item.genre()),
            Cell::new(item.platform()),
            Cell::new(item.year()),
            status_cell,
            Cell::new(seasons),
            Cell::new(episodes),
            Cell::new(item.rating()),
            Cell::new(item.details().added_at.format("%Y-%m-%d")),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

/// In-memory sink shared between an `Output` and the test reading it back
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::rc::Rc<RefCell<Vec<u8>>>);

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl Output {
    /// Output whose stdout and stderr land in the returned buffers
    pub(crate) fn captured(format: OutputFormat, quiet: bool) -> (Self, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let output = Self::with_writers(format, quiet, Box::new(out.clone()), Box::new(err.clone()));
        (output, out, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_tracker_models::{Movie, MovieStatus, TvShow, TvShowStatus};

    fn create_movie() -> MediaItem {
        Movie::new("Heat", "Action", 1995, MovieStatus::Watched, "Blu-ray").into()
    }

    #[test]
    fn test_media_table_rows() {
        let movie = create_movie();
        let show: MediaItem = TvShow::new("Dark", "Drama", 2017, TvShowStatus::Watching, "Netflix", 3, 14).into();

        let rendered = media_table(&[&movie, &show]).to_string();
        assert!(rendered.contains("Heat"));
        assert!(rendered.contains("TV Show"));
        assert!(rendered.contains("WATCHING"));
        assert!(rendered.contains("Not Rated"));
        assert!(rendered.contains("14"));
        assert!(rendered.contains(&movie.details().added_at.format("%Y-%m-%d").to_string()));
    }

    #[test]
    fn test_quiet_keeps_listings_and_empty_notices() {
        let (output, out, _) = Output::captured(OutputFormat::Human, true);
        let movie = create_movie();

        output.println("--- heading ---");
        output.success("done");
        output.media_list(&[&movie], false);
        output.empty_result("Nothing here.");

        let printed = out.contents();
        assert!(!printed.contains("heading"));
        assert!(!printed.contains("done"));
        assert!(printed.contains("1. Movie - Title: Heat"));
        assert!(printed.contains("Nothing here."));
    }

    #[test]
    fn test_errors_go_to_stderr_even_when_quiet() {
        let (output, out, err) = Output::captured(OutputFormat::Human, true);
        output.error("broken");
        assert!(out.contents().is_empty());
        assert!(err.contents().contains("broken"));
    }

    #[test]
    fn test_json_listing_records() {
        let (output, out, _) = Output::captured(OutputFormat::Json, true);
        let movie = create_movie();

        output.media_list(&[&movie], true);
        output.empty_result("No media items tracked yet.");

        let lines: Vec<serde_json::Value> = out
            .contents()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["count"], 1);
        assert_eq!(lines[0]["items"][0]["title"], "Heat");
        assert_eq!(lines[1]["count"], 0);
    }
}
