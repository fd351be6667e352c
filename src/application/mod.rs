//! Application layer - Use cases and orchestration

pub mod child_age;
pub mod init;
pub mod list_items;
pub mod manage_config;
pub mod week_progress;

pub use child_age::{ChildAgeReport, ChildAgeService};
pub use init::InitService;
pub use list_items::{EntryRow, ListItemsService};
pub use manage_config::ConfigService;
pub use week_progress::WeekProgressService;
