pub mod config;
pub mod paths;

pub use config::{Config, DisplayConfig, LoggingConfig, TrackerConfig};
pub use paths::{PathManager, home_override};
