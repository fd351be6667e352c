//! Child age calculation
//!
//! Ages are counted in calendar months plus remaining days. When a month
//! anchor would land past the end of a shorter month it is clamped to that
//! month's last day (Jan 31 + 1 month = Feb 28/29).

use super::child::Child;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Structured age of a child at some date.
///
/// Ordering is lexicographic over (years, months, days), which matches the
/// elapsed time between birth and the target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ChildAge {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl ChildAge {
    /// Age at `target`, or `None` when `target` precedes the birth date
    pub fn between(date_of_birth: NaiveDate, target: NaiveDate) -> Option<Self> {
        if target < date_of_birth {
            return None;
        }

        let mut total_months = (target.year() - date_of_birth.year()) * 12
            + target.month() as i32
            - date_of_birth.month() as i32;
        if target.day() < date_of_birth.day() {
            total_months -= 1;
        }
        let total_months = u32::try_from(total_months).ok()?;

        let anchor = date_of_birth.checked_add_months(Months::new(total_months))?;
        let days = u32::try_from((target - anchor).num_days()).ok()?;

        Some(ChildAge {
            years: total_months / 12,
            months: total_months % 12,
            days,
        })
    }

    /// Whole calendar months since birth
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for ChildAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.years > 0 {
            write!(f, "{}", plural(self.years, "year"))?;
            if self.months > 0 {
                write!(f, ", {}", plural(self.months, "month"))?;
            }
            Ok(())
        } else if self.months > 0 {
            write!(f, "{}", plural(self.months, "month"))?;
            if self.days > 0 {
                write!(f, ", {}", plural(self.days, "day"))?;
            }
            Ok(())
        } else {
            write!(f, "{}", plural(self.days, "day"))
        }
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Human-readable age of a child at `target`.
///
/// Returns an empty string when `target` is before the birth date.
pub fn calculate_age_at_date(date_of_birth: NaiveDate, target: NaiveDate) -> String {
    ChildAge::between(date_of_birth, target)
        .map(|age| age.to_string())
        .unwrap_or_default()
}

/// Date-of-birth lookups keyed by child id.
///
/// Owned by whoever renders ages; call [`AgeCache::invalidate`] when a child
/// profile changes. Dropping the cache never changes results.
#[derive(Debug, Default, Clone)]
pub struct AgeCache {
    birth_dates: HashMap<String, Option<NaiveDate>>,
}

impl AgeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or refresh) a child's birth date
    pub fn remember(&mut self, child: &Child) {
        self.birth_dates
            .insert(child.id.clone(), child.date_of_birth);
    }

    /// Cached birth date, if the child has been seen
    pub fn birth_date(&self, child_id: &str) -> Option<NaiveDate> {
        self.birth_dates.get(child_id).copied().flatten()
    }

    pub fn contains(&self, child_id: &str) -> bool {
        self.birth_dates.contains_key(child_id)
    }

    /// Age string for a child, falling back to a stored age string and then
    /// to the empty string when no birth date is known.
    pub fn age_for(&self, child_id: &str, target: NaiveDate, fallback: Option<&str>) -> String {
        match self.birth_date(child_id) {
            Some(dob) => {
                debug!(child_id, "age cache hit");
                calculate_age_at_date(dob, target)
            }
            None => {
                debug!(child_id, "age cache miss, using stored age");
                fallback.unwrap_or_default().to_string()
            }
        }
    }

    pub fn invalidate(&mut self, child_id: &str) {
        self.birth_dates.remove(child_id);
    }

    pub fn clear(&mut self) {
        self.birth_dates.clear();
    }

    pub fn len(&self) -> usize {
        self.birth_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birth_dates.is_empty()
    }
}
