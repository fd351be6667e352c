//! List entries and recaps use case

use super::child_age::resolve_child_id;
use crate::domain::{filter_and_sort_items, AgeCache, FilterParams, JournalEntry, Recap};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, NaiveDate, TimeZone};

/// A journal entry ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRow {
    pub entry: JournalEntry,
    /// Calendar day the entry was written, in the zone of the listing's "now"
    pub written_on: Option<NaiveDate>,
    /// Age of the filtered child when the entry was written
    pub age: Option<String>,
}

/// Service for listing filtered entries and recaps
pub struct ListItemsService {
    repository: FileSystemRepository,
}

impl ListItemsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ListItemsService { repository }
    }

    /// Fill in the configured default child when no owner filter was given
    fn effective_params(&self, params: &FilterParams) -> Result<FilterParams> {
        let config = self.repository.load_config()?;
        let mut params = params.clone();
        params.owner_or_child_id = resolve_child_id(
            params.owner_or_child_id.as_deref(),
            config.default_child.as_deref(),
        );
        Ok(params)
    }

    pub fn list_entries<Tz: TimeZone>(
        &self,
        params: &FilterParams,
        now: &DateTime<Tz>,
        limit: Option<usize>,
    ) -> Result<Vec<EntryRow>> {
        let params = self.effective_params(params)?;
        let snapshot = self.repository.load_snapshot()?;

        let mut cache = AgeCache::new();
        if let Some(id) = params.owner_or_child_id.as_deref() {
            if let Some(child) = snapshot.children.iter().find(|c| c.id == id) {
                cache.remember(child);
            }
        }

        let zone = now.timezone();
        let rows = filter_and_sort_items(&snapshot.entries, &params, now)
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|entry| {
                let written_on = entry
                    .created_at
                    .map(|created| created.with_timezone(&zone).date_naive());
                let age = params.owner_or_child_id.as_deref().and_then(|id| {
                    let fallback = entry.stored_age(id);
                    let age = match written_on {
                        Some(day) => cache.age_for(id, day, fallback),
                        None => fallback.unwrap_or_default().to_string(),
                    };
                    (!age.is_empty()).then_some(age)
                });
                EntryRow {
                    entry: entry.clone(),
                    written_on,
                    age,
                }
            })
            .collect();

        Ok(rows)
    }

    pub fn list_recaps<Tz: TimeZone>(
        &self,
        params: &FilterParams,
        now: &DateTime<Tz>,
        limit: Option<usize>,
    ) -> Result<Vec<Recap>> {
        let params = self.effective_params(params)?;
        let snapshot = self.repository.load_snapshot()?;

        Ok(filter_and_sort_items(&snapshot.recaps, &params, now)
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
