//! Configuration management

use crate::error::{Result, SproutError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the marker directory at the journal root
pub const SPROUTBOOK_DIR: &str = ".sproutbook";

pub const DEFAULT_SNAPSHOT: &str = "snapshot.json";

fn default_snapshot() -> String {
    DEFAULT_SNAPSHOT.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file, relative to the journal root
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    /// Child used when a command is not given one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_child: Option<String>,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            snapshot: default_snapshot(),
            default_child: None,
            created: Utc::now(),
        }
    }

    /// Load config from .sproutbook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SPROUTBOOK_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SproutError::NotSproutbookDirectory(path.to_path_buf())
            } else {
                SproutError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .sproutbook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let marker_dir = path.join(SPROUTBOOK_DIR);
        let config_path = marker_dir.join("config.toml");

        if !marker_dir.exists() {
            fs::create_dir(&marker_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
