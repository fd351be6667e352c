//! File system repository
//!
//! The journal root holds a `.sproutbook/` marker directory with the config
//! and a JSON snapshot of the records previously fetched from the document
//! store.

use crate::domain::{Child, JournalEntry, Recap, User};
use crate::error::{Result, SproutError};
use crate::infrastructure::config::{Config, SPROUTBOOK_DIR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that pins the journal root
pub const ROOT_ENV: &str = "SPROUTBOOK_ROOT";

/// Records from the document store collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(default)]
    pub entries: Vec<JournalEntry>,
    #[serde(default)]
    pub recaps: Vec<Recap>,
}

impl Snapshot {
    /// Parse a snapshot and check recap periods
    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(contents)?;
        for recap in &snapshot.recaps {
            recap.validate()?;
        }
        Ok(snapshot)
    }

    pub fn find_child(&self, child_id: &str) -> Result<&Child> {
        self.children
            .iter()
            .find(|c| c.id == child_id)
            .ok_or_else(|| SproutError::ChildNotFound(child_id.to_string()))
    }
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Load configuration from .sproutbook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .sproutbook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .sproutbook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .sproutbook directory structure
    fn initialize(&self) -> Result<()>;

    /// Load the record snapshot named in the config
    fn load_snapshot(&self) -> Result<Snapshot>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks SPROUTBOOK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SproutError::Config(format!(
                    "{} is set to '{}' but no .sproutbook directory found. \
                    Run 'sproutbook init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SproutError::NotSproutbookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_marker_dir(path: &Path) -> bool {
        path.join(SPROUTBOOK_DIR).is_dir()
    }

    /// Absolute path of the snapshot file for a config
    pub fn snapshot_path(&self, config: &Config) -> PathBuf {
        self.root.join(&config.snapshot)
    }

    /// Write a snapshot to the configured location
    pub fn save_snapshot(&self, config: &Config, snapshot: &Snapshot) -> Result<()> {
        let path = self.snapshot_path(config);
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(SproutError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(SPROUTBOOK_DIR))?;
        Ok(())
    }

    /// A missing snapshot file reads as an empty snapshot
    fn load_snapshot(&self) -> Result<Snapshot> {
        let config = self.load_config()?;
        let path = self.snapshot_path(&config);

        if !path.exists() {
            debug!(path = %path.display(), "no snapshot file, using empty snapshot");
            return Ok(Snapshot::default());
        }

        let contents = fs::read_to_string(&path)?;
        let snapshot = Snapshot::from_json(&contents)?;
        info!(
            children = snapshot.children.len(),
            entries = snapshot.entries.len(),
            recaps = snapshot.recaps.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}
