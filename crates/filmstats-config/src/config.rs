use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths::PathManager;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Directory holding `<collection>.json` files (defaults to the platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_films_collection")]
    pub films_collection: String,
    #[serde(default = "default_reviews_collection")]
    pub reviews_collection: String,
    /// Give up on a collection read after this many seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON logs on or off; unset means JSON when stdout is not a terminal
    #[serde(default)]
    pub json: Option<bool>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_films_collection() -> String {
    "Films".to_string()
}

fn default_reviews_collection() -> String {
    "FilmReviews".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            films_collection: default_films_collection(),
            reviews_collection: default_reviews_collection(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Defaults pointed at the platform layout: collections in the data dir,
    /// logs rotated under the log dir.
    pub fn for_paths(paths: &PathManager) -> Self {
        let mut config = Self::default();
        config.store.data_dir = Some(paths.data_dir().to_path_buf());
        config.logging.file = Some(paths.log_file());
        config
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
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
        if self.store.films_collection.trim().is_empty() {
            return Err(anyhow::anyhow!("store.films_collection cannot be empty"));
        }
        if self.store.reviews_collection.trim().is_empty() {
            return Err(anyhow::anyhow!("store.reviews_collection cannot be empty"));
        }
        if self.store.timeout_secs == 0 {
            return Err(anyhow::anyhow!("store.timeout_secs must be greater than zero"));
        }
        if self.logging.level.trim().is_empty() {
            return Err(anyhow::anyhow!("logging.level cannot be empty"));
        }
        Ok(())
    }
}
