//! Child age lookup use case

use crate::domain::{AgeCache, JournalEntry, Lifestage};
use crate::error::{Result, SproutError};
use crate::infrastructure::{FileSystemRepository, JournalRepository, Snapshot};
use chrono::NaiveDate;

/// Age of one child at a given date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildAgeReport {
    pub child_id: String,
    pub name: String,
    pub on: NaiveDate,
    /// Empty when the date precedes the birth date and nothing is stored
    pub age: String,
    pub lifestage: Option<Lifestage>,
}

/// Pick the explicit child id, else the configured default
pub(crate) fn resolve_child_id(
    explicit: Option<&str>,
    default_child: Option<&str>,
) -> Option<String> {
    explicit
        .or(default_child)
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Most recent age string stored on an entry for `child_id`
fn latest_stored_age<'a>(entries: &'a [JournalEntry], child_id: &str) -> Option<&'a str> {
    entries
        .iter()
        .filter_map(|e| e.stored_age(child_id).map(|age| (e.created_at, age)))
        .max_by_key(|(created, _)| *created)
        .map(|(_, age)| age)
}

/// Service for computing a child's age from the snapshot
pub struct ChildAgeService {
    repository: FileSystemRepository,
    cache: AgeCache,
}

impl ChildAgeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ChildAgeService {
            repository,
            cache: AgeCache::new(),
        }
    }

    /// Forget a child's cached birth date after its profile changed
    pub fn child_updated(&mut self, child_id: &str) {
        self.cache.invalidate(child_id);
    }

    pub fn execute(&mut self, child_id: Option<&str>, on: NaiveDate) -> Result<ChildAgeReport> {
        let config = self.repository.load_config()?;
        let child_id = resolve_child_id(child_id, config.default_child.as_deref()).ok_or_else(
            || {
                SproutError::Config(
                    "No child given. Pass a child id or set default_child".to_string(),
                )
            },
        )?;

        let snapshot = self.repository.load_snapshot()?;
        self.report(&snapshot, &child_id, on)
    }

    /// Build the report from an already loaded snapshot
    pub fn report(
        &mut self,
        snapshot: &Snapshot,
        child_id: &str,
        on: NaiveDate,
    ) -> Result<ChildAgeReport> {
        let child = snapshot.find_child(child_id)?;
        if !self.cache.contains(child_id) {
            self.cache.remember(child);
        }

        let fallback = latest_stored_age(&snapshot.entries, child_id);
        let age = self.cache.age_for(child_id, on, fallback);

        Ok(ChildAgeReport {
            child_id: child.id.clone(),
            name: child.name.clone(),
            on,
            age,
            lifestage: child.lifestage_at(on),
        })
    }
}
