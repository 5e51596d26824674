//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_distribution, format_entry_list, format_mood_flow, format_summary,
    format_time_pattern,
};
