//! CLI command definitions

use crate::error::{Result, SproutError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sproutbook")]
#[command(about = "Child journal toolkit: ages, week progress, and filtered memories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal root
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show a child's age
    Age {
        /// Child id (default: configured default_child)
        child: Option<String>,

        /// Date to compute the age at, DD-MM-YYYY (default: today)
        #[arg(long, value_name = "DATE")]
        on: Option<String>,
    },

    /// Show this week's journaling progress
    Week {
        /// Only count entries about this child
        #[arg(short, long)]
        child: Option<String>,

        /// Pretend today is this date, DD-MM-YYYY
        #[arg(long, value_name = "DATE")]
        on: Option<String>,
    },

    /// List journal entries or recaps
    List {
        /// List recaps instead of journal entries
        #[arg(long)]
        recaps: bool,

        /// Time window (all, weekly, monthly)
        #[arg(short, long, default_value = "all")]
        timeline: String,

        /// Only items about this child (or owned by this user)
        #[arg(short, long)]
        child: Option<String>,

        /// Case-insensitive text search
        #[arg(short, long)]
        search: Option<String>,

        /// Keep items carrying any of these tags (favorite, milestone)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Maximum number of items to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Pretend today is this date, DD-MM-YYYY
        #[arg(long, value_name = "DATE")]
        on: Option<String>,
    },
}

/// Parse a DD-MM-YYYY command-line date
pub fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|_| SproutError::InvalidDate(input.to_string()))
}
