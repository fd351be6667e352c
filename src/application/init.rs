//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository, Snapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// Service for creating a new journal root
pub struct InitService;

impl InitService {
    /// Create `.sproutbook/` with a default config and an empty snapshot.
    /// An existing snapshot file is left untouched.
    pub fn execute(path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;

        let snapshot_path = repo.snapshot_path(&config);
        if !snapshot_path.exists() {
            repo.save_snapshot(&config, &Snapshot::default())?;
        }

        Ok(snapshot_path)
    }
}
