//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{parse_date_arg, Cli, Commands};
pub use output::{format_age, format_entry_list, format_recap_list, format_week};
