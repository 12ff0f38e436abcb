use media_tracker_models::FilterMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool behaviour settings. Collection data is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// How multi-entry filter criteria combine
    #[serde(default)]
    pub filter_mode: FilterMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Render listings as tables instead of one line per item
    #[serde(default = "default_true")]
    pub table: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    // The shell owns the terminal; keep diagnostics quiet unless asked
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { table: default_true() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let level = self.logging.level.trim();
        if level.is_empty() {
            return Err(anyhow::anyhow!("logging.level cannot be empty"));
        }

        // Plain levels are checked here; full directives (e.g. "media_tracker_core=debug")
        // are left for the subscriber to interpret
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid logging.level '{}': expected one of {}",
                level,
                LOG_LEVELS.join(", ")
            ));
        }

        if let Some(ref file) = self.logging.file {
            if file.file_name().is_none() {
                return Err(anyhow::anyhow!("logging.file must name a file: {}", file.display()));
            }
        }

        Ok(())
    }
}
