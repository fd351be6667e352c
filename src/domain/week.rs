//! Week progress: the Sunday-start week around "now" and which days have entries

use super::timestamp::Dated;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Display status of one day in the week strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// A past day with at least one entry
    Checked,
    /// Today
    Filled,
    /// Anything else
    Empty,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::Checked => "checked",
            DayStatus::Filled => "filled",
            DayStatus::Empty => "empty",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    pub label: &'static str,
    pub date: NaiveDate,
    pub status: DayStatus,
    pub is_today: bool,
    pub has_entry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekProgress {
    /// Always a Sunday
    pub week_start: NaiveDate,
    pub days: Vec<WeekDay>,
    /// Entries whose creation date falls inside this week
    pub total_entries: usize,
    pub completed_days: usize,
    /// Past days without any entry
    pub missed_days: usize,
    /// Entries ignored because their timestamp was missing or malformed
    pub skipped_entries: usize,
}

impl WeekProgress {
    pub fn today(&self) -> Option<&WeekDay> {
        self.days.iter().find(|d| d.is_today)
    }
}

/// Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Build the week strip for the week containing `now`.
///
/// Days are calendar days in `now`'s time zone. Days after today are always
/// empty; one entry is enough to check a past day.
pub fn compute_week_progress<T, Tz>(entries: &[T], now: &DateTime<Tz>) -> WeekProgress
where
    T: Dated,
    Tz: TimeZone,
{
    let zone = now.timezone();
    let today = now.date_naive();
    let start = week_start(today);
    let end = start + Duration::days(6);

    let mut entry_days = BTreeSet::new();
    let mut total_entries = 0;
    let mut skipped_entries = 0;

    for entry in entries {
        let Some(created) = entry.created_at() else {
            skipped_entries += 1;
            continue;
        };
        let day = created.with_timezone(&zone).date_naive();
        if day >= start && day <= end {
            total_entries += 1;
            entry_days.insert(day);
        }
    }

    if skipped_entries > 0 {
        debug!(skipped_entries, "entries without a usable timestamp");
    }

    let days: Vec<WeekDay> = (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let is_today = date == today;
            let has_entry = entry_days.contains(&date);
            let status = if is_today {
                DayStatus::Filled
            } else if date < today && has_entry {
                DayStatus::Checked
            } else {
                DayStatus::Empty
            };
            WeekDay {
                label: DAY_LABELS[offset as usize],
                date,
                status,
                is_today,
                has_entry,
            }
        })
        .collect();

    let completed_days = days
        .iter()
        .filter(|d| d.status == DayStatus::Checked)
        .count();
    let missed_days = days
        .iter()
        .filter(|d| d.date < today && !d.has_entry)
        .count();

    WeekProgress {
        week_start: start,
        days,
        total_entries,
        completed_days,
        missed_days,
        skipped_entries,
    }
}
