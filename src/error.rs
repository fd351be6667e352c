//! Error types for sproutbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sproutbook toolkit
#[derive(Debug, Error)]
pub enum SproutError {
    #[error("Not a sproutbook directory: {0}")]
    NotSproutbookDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Child not found: {0}")]
    ChildNotFound(String),

    #[error("Invalid recap period for '{id}': start {start} is after end {end}")]
    InvalidRecapPeriod {
        id: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SproutError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SproutError::NotSproutbookDirectory(_) => 2,
            SproutError::InvalidDate(_) => 3,
            SproutError::ChildNotFound(_) => 4,
            SproutError::InvalidRecapPeriod { .. } | SproutError::Json(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SproutError::NotSproutbookDirectory(path) => {
                format!(
                    "Not a sproutbook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'sproutbook init' in this directory to create a new journal\n\
                    • Navigate to an existing sproutbook directory\n\
                    • Set SPROUTBOOK_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            SproutError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: DD-MM-YYYY\n\n\
                    Examples:\n\
                    sproutbook week --on 13-03-2024\n\
                    sproutbook age child-1 --on 01-06-2025",
                    input
                )
            }
            SproutError::ChildNotFound(id) => {
                format!(
                    "Child not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the child id in your snapshot file\n\
                    • Set a default child: sproutbook config default_child <id>",
                    id
                )
            }
            SproutError::Json(err) => {
                format!(
                    "Could not read snapshot: {}\n\n\
                    Suggestions:\n\
                    • Check that the snapshot file is valid JSON\n\
                    • Point to another file: sproutbook config snapshot <path>",
                    err
                )
            }
            SproutError::Config(msg) => {
                if msg.contains("Invalid timeline") {
                    format!(
                        "{}\n\n\
                        Valid timelines: all, weekly, monthly\n\
                        Example: sproutbook list --timeline weekly",
                        msg
                    )
                } else if msg.contains("Invalid tag") {
                    format!(
                        "{}\n\n\
                        Valid tags: favorite, milestone\n\
                        Example: sproutbook list --tag favorite",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SproutError
pub type Result<T> = std::result::Result<T, SproutError>;
