//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add a journal entry
    Add {
        /// Mood (content, grateful, focused, anxious, frustrated, sad)
        mood: String,

        /// Entry text; without it the configured editor opens
        #[arg(short, long)]
        message: Option<String>,

        /// Mark as a quick entry
        #[arg(long)]
        quick: bool,
    },

    /// List entries, newest first
    List {
        /// Time range (all, week, month)
        #[arg(short, long, default_value = "all")]
        range: String,

        /// Filter by text in the entry or mood name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show at most N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id as printed by list
        id: Uuid,
    },

    /// Edit an entry; without options the editor opens on its text
    Edit {
        /// Entry id as printed by list
        id: Uuid,

        /// New mood
        #[arg(long)]
        mood: Option<String>,

        /// New entry text
        #[arg(short, long)]
        message: Option<String>,

        /// Mark as a quick entry
        #[arg(long, conflicts_with = "no_quick")]
        quick: bool,

        /// Clear the quick-entry mark
        #[arg(long)]
        no_quick: bool,
    },

    /// Show journal statistics
    Stats,

    /// Export the journal
    Export {
        /// Export format (csv, html)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
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
}
