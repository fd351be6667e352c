//! Journal entries

use super::timestamp::{self, Dated};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of media attached to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Reference to an uploaded media object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A journal entry as stored in the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_milestone: bool,
    /// Age strings captured when the entry was written, keyed by child id
    #[serde(default)]
    pub child_age_at_entry: BTreeMap<String, String>,
    /// Like state, keyed by child id
    #[serde(default)]
    pub likes: BTreeMap<String, bool>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub child_ids: Option<Vec<String>>,
}

impl JournalEntry {
    /// Stored age string for a child, if one was captured
    pub fn stored_age(&self, child_id: &str) -> Option<&str> {
        self.child_age_at_entry.get(child_id).map(String::as_str)
    }

    pub fn is_liked_for(&self, child_id: &str) -> bool {
        self.likes.get(child_id).copied().unwrap_or(false)
    }

    pub fn mentions_child(&self, child_id: &str) -> bool {
        self.child_ids
            .as_ref()
            .is_some_and(|ids| ids.iter().any(|id| id == child_id))
    }

    pub fn image_count(&self) -> usize {
        self.media
            .iter()
            .filter(|m| m.kind == MediaType::Image)
            .count()
    }

    pub fn video_count(&self) -> usize {
        self.media
            .iter()
            .filter(|m| m.kind == MediaType::Video)
            .count()
    }
}

impl Dated for JournalEntry {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
