use anyhow::Result;
use std::path::PathBuf;

/// Base directory override from the MEDIA_TRACKER_HOME environment variable
pub fn home_override() -> Option<PathBuf> {
    std::env::var_os("MEDIA_TRACKER_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("media-tracker");

        Ok(Self::from_base(base_dir))
    }

    /// Config files at the base level, logs in a subdirectory
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            log_dir: base.join("logs"),
            config_dir: base,
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn default_log_file(&self) -> PathBuf {
        self.log_dir.join("media-tracker.log")
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = home_override() {
            return Self::from_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/media-tracker on Linux),
        // falling back to the working directory when none is known
        Self::new().unwrap_or_else(|_| Self::from_base(".media-tracker"))
    }
}
