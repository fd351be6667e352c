//! Filtering and ordering of journal entries and recaps
//!
//! All active filters must pass for an item to be kept. The tag filter is the
//! exception inside itself: an item passes when it carries any of the
//! requested tags.

use super::entry::JournalEntry;
use super::recap::Recap;
use super::timestamp::Dated;
use super::week::week_start;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use tracing::debug;

/// Time window applied to a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    #[default]
    All,
    /// Since the start of the current Sunday-start week
    Weekly,
    /// Since the first of the current month
    Monthly,
}

impl Timeline {
    /// First calendar day inside the window, `None` for an unbounded window
    pub fn window_start(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Timeline::All => None,
            Timeline::Weekly => Some(week_start(today)),
            Timeline::Monthly => Some(today.with_day(1).unwrap_or(today)),
        }
    }
}

impl FromStr for Timeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Timeline::All),
            "weekly" | "week" => Ok(Timeline::Weekly),
            "monthly" | "month" => Ok(Timeline::Monthly),
            _ => Err(format!(
                "Invalid timeline: '{}'. Valid timelines are: all, weekly, monthly",
                s
            )),
        }
    }
}

/// Flags an item can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTag {
    Favorite,
    Milestone,
}

impl FromStr for ItemTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "favorite" | "favourite" => Ok(ItemTag::Favorite),
            "milestone" => Ok(ItemTag::Milestone),
            _ => Err(format!(
                "Invalid tag: '{}'. Valid tags are: favorite, milestone",
                s
            )),
        }
    }
}

/// Fields the filter pipeline needs from a record
pub trait Filterable: Dated {
    fn is_favorited(&self) -> bool;

    fn is_milestone(&self) -> bool;

    /// Whether the item belongs to the given owner or child id
    fn matches_owner(&self, id: &str) -> bool;

    /// Text searched by the free-text filter
    fn search_body(&self) -> Cow<'_, str>;

    fn has_tag(&self, tag: ItemTag) -> bool {
        match tag {
            ItemTag::Favorite => self.is_favorited(),
            ItemTag::Milestone => self.is_milestone(),
        }
    }
}

impl Filterable for JournalEntry {
    fn is_favorited(&self) -> bool {
        self.is_favorited
    }

    fn is_milestone(&self) -> bool {
        self.is_milestone
    }

    fn matches_owner(&self, id: &str) -> bool {
        self.mentions_child(id)
    }

    fn search_body(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

impl Filterable for Recap {
    fn is_favorited(&self) -> bool {
        self.is_favorited
    }

    fn is_milestone(&self) -> bool {
        self.is_milestone
    }

    fn matches_owner(&self, id: &str) -> bool {
        self.child_id == id || self.user_id == id
    }

    fn search_body(&self) -> Cow<'_, str> {
        let content = &self.ai_generated;
        let mut body = format!("{}\n{}", content.title, content.summary);
        if let Some(milestone) = &content.milestone {
            body.push('\n');
            body.push_str(milestone);
        }
        Cow::Owned(body)
    }
}

/// Parameters for [`filter_and_sort_items`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    pub timeline: Timeline,
    pub owner_or_child_id: Option<String>,
    pub search_text: Option<String>,
    /// Matches when an item carries any of these tags; empty means no tag filter
    pub required_tags: Vec<ItemTag>,
}

impl FilterParams {
    pub fn new(timeline: Timeline) -> Self {
        FilterParams {
            timeline,
            ..Default::default()
        }
    }

    pub fn with_owner(mut self, id: impl Into<String>) -> Self {
        self.owner_or_child_id = Some(id.into());
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_tag(mut self, tag: ItemTag) -> Self {
        if !self.required_tags.contains(&tag) {
            self.required_tags.push(tag);
        }
        self
    }

    /// Lowercased search needle, `None` when blank
    fn needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether `item` passes every active filter.
    ///
    /// Items without a usable timestamp never fall inside a bounded window.
    pub fn matches<T, Tz>(&self, item: &T, now: &DateTime<Tz>) -> bool
    where
        T: Filterable,
        Tz: TimeZone,
    {
        self.prepare(now).accepts(item)
    }

    /// Resolve the window and search needle once for a whole pass
    fn prepare<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> PreparedFilter<'_, Tz> {
        PreparedFilter {
            params: self,
            window: self.timeline.window_start(now.date_naive()),
            zone: now.timezone(),
            needle: self.needle(),
        }
    }
}

/// [`FilterParams`] with its `now`-dependent parts resolved
struct PreparedFilter<'p, Tz: TimeZone> {
    params: &'p FilterParams,
    window: Option<NaiveDate>,
    zone: Tz,
    needle: Option<String>,
}

impl<Tz: TimeZone> PreparedFilter<'_, Tz> {
    fn accepts<T: Filterable>(&self, item: &T) -> bool {
        self.in_window(item) && self.owned(item) && self.found(item) && self.tagged(item)
    }

    fn in_window<T: Filterable>(&self, item: &T) -> bool {
        match self.window {
            None => true,
            Some(start) => item
                .created_at()
                .is_some_and(|created| created.with_timezone(&self.zone).date_naive() >= start),
        }
    }

    fn owned<T: Filterable>(&self, item: &T) -> bool {
        self.params
            .owner_or_child_id
            .as_deref()
            .is_none_or(|id| item.matches_owner(id))
    }

    fn found<T: Filterable>(&self, item: &T) -> bool {
        self.needle
            .as_deref()
            .is_none_or(|needle| item.search_body().to_lowercase().contains(needle))
    }

    fn tagged<T: Filterable>(&self, item: &T) -> bool {
        let tags = &self.params.required_tags;
        tags.is_empty() || tags.iter().any(|tag| item.has_tag(*tag))
    }
}

/// Filter `items` with `params` and sort newest first.
///
/// The sort is stable: items with equal timestamps keep their input order.
/// Items without a usable timestamp sort after everything else.
pub fn filter_and_sort_items<'a, T, Tz>(
    items: &'a [T],
    params: &FilterParams,
    now: &DateTime<Tz>,
) -> Vec<&'a T>
where
    T: Filterable,
    Tz: TimeZone,
{
    let filter = params.prepare(now);
    let mut kept: Vec<&T> = items.iter().filter(|item| filter.accepts(*item)).collect();

    kept.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

    debug!(
        total = items.len(),
        kept = kept.len(),
        timeline = ?params.timeline,
        "filtered items"
    );
    kept
}
