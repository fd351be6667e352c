//! AI recaps and their reporting periods

use super::timestamp::{self, Dated};
use super::week::week_start;
use crate::error::{Result, SproutError};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How much time a recap covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecapType {
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for RecapType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(RecapType::Weekly),
            "monthly" => Ok(RecapType::Monthly),
            "yearly" => Ok(RecapType::Yearly),
            _ => Err(format!(
                "Invalid recap type: '{}'. Valid types are: weekly, monthly, yearly",
                s
            )),
        }
    }
}

/// Inclusive date range covered by a recap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecapPeriod {
    #[serde(deserialize_with = "timestamp::deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "timestamp::deserialize_date")]
    pub end_date: NaiveDate,
}

impl RecapPeriod {
    /// The week (Sunday-start), month, or year containing `date`
    pub fn containing(kind: RecapType, date: NaiveDate) -> Self {
        let (start_date, end_date) = match kind {
            RecapType::Weekly => {
                let start = week_start(date);
                (start, start + Duration::days(6))
            }
            RecapType::Monthly => {
                let start = date.with_day(1).unwrap_or(date);
                let end = start
                    .checked_add_months(chrono::Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .unwrap_or(date);
                (start, end)
            }
            RecapType::Yearly => {
                let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
                let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
                (start, end)
            }
        };
        RecapPeriod {
            start_date,
            end_date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days covered, both ends included
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Generated text of a recap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecapContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub milestone: Option<String>,
}

/// A periodic recap as stored in the `recaps` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recap {
    pub id: String,
    pub user_id: String,
    pub child_id: String,
    #[serde(rename = "type")]
    pub kind: RecapType,
    pub period: RecapPeriod,
    #[serde(default)]
    pub ai_generated: RecapContent,
    #[serde(default)]
    pub highlight_photos: Vec<String>,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_milestone: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Recap {
    /// Check that the period does not run backwards
    pub fn validate(&self) -> Result<()> {
        if self.period.start_date > self.period.end_date {
            return Err(SproutError::InvalidRecapPeriod {
                id: self.id.clone(),
                start: self.period.start_date,
                end: self.period.end_date,
            });
        }
        Ok(())
    }
}

impl Dated for Recap {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
