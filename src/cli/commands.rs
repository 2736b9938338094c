//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjournal")]
#[command(about = "Mood-tracking journal for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write a new journal entry (mood is inferred from the content)
    Add {
        /// Entry date, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Entry title
        #[arg(short, long)]
        title: String,

        /// Entry text
        #[arg(short, long)]
        content: String,
    },

    /// Edit an existing entry; omitted fields keep their stored values
    Edit {
        /// Entry id
        id: String,

        /// New date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New text (the mood is re-inferred)
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Show one entry in full
    Show {
        /// Entry id
        id: String,
    },

    /// List entries, newest first
    List {
        /// Only entries with this mood
        #[arg(long)]
        mood: Option<String>,

        /// Case-insensitive search in titles and content
        #[arg(short, long)]
        search: Option<String>,

        /// Earliest date, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// Latest date, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Mood statistics over the journal
    Stats {
        /// Earliest date, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// Latest date, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
    },

    /// Preview the mood of a text without saving it (reads stdin if no text)
    Analyze {
        /// Text to classify
        text: Option<String>,
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
