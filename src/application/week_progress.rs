//! Week progress use case

use super::child_age::resolve_child_id;
use crate::domain::{compute_week_progress, JournalEntry, WeekProgress};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, TimeZone};

/// Service for building the current week strip from the snapshot
pub struct WeekProgressService {
    repository: FileSystemRepository,
}

impl WeekProgressService {
    pub fn new(repository: FileSystemRepository) -> Self {
        WeekProgressService { repository }
    }

    /// Week strip for the week containing `now`, limited to entries about the
    /// given (or default) child when one is set.
    pub fn execute<Tz: TimeZone>(
        &self,
        child_id: Option<&str>,
        now: &DateTime<Tz>,
    ) -> Result<WeekProgress> {
        let config = self.repository.load_config()?;
        let snapshot = self.repository.load_snapshot()?;

        let progress = match resolve_child_id(child_id, config.default_child.as_deref()) {
            Some(id) => {
                snapshot.find_child(&id)?;
                let entries: Vec<JournalEntry> = snapshot
                    .entries
                    .into_iter()
                    .filter(|e| e.mentions_child(&id))
                    .collect();
                compute_week_progress(&entries, now)
            }
            None => compute_week_progress(&snapshot.entries, now),
        };

        Ok(progress)
    }
}
