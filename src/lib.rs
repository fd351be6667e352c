//! sproutbook - Child journal toolkit
//!
//! Date bucketing and list filtering for a family journal: a child's age at a
//! date, the Sunday-start week strip with per-day status, and the filter and
//! sort pipeline for journal entries and recaps. A small CLI runs these over
//! a local JSON snapshot of the journal's records.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{calculate_age_at_date, compute_week_progress, filter_and_sort_items};
pub use error::SproutError;
