//! Domain layer - Records, date bucketing, and list filtering

pub mod age;
pub mod child;
pub mod entry;
pub mod filter;
pub mod recap;
pub mod timestamp;
pub mod week;

pub use age::{calculate_age_at_date, AgeCache, ChildAge};
pub use child::{Child, Gender, Lifestage, User};
pub use entry::{JournalEntry, MediaRef, MediaType};
pub use filter::{filter_and_sort_items, FilterParams, Filterable, ItemTag, Timeline};
pub use recap::{Recap, RecapContent, RecapPeriod, RecapType};
pub use timestamp::{to_date, Dated};
pub use week::{compute_week_progress, DayStatus, WeekDay, WeekProgress};
