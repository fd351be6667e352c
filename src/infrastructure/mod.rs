//! Infrastructure layer - Configuration and snapshot persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository, Snapshot};
