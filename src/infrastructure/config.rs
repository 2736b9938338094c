//! Configuration management

use crate::error::{MoodJournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default filename for the persisted entries table
pub const DEFAULT_ENTRIES_FILE: &str = "journal_entries.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Entries CSV filename, relative to the journal root
    pub entries_file: String,
    /// Whether add/analyze print the motivational quote
    pub show_quotes: bool,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            entries_file: DEFAULT_ENTRIES_FILE.to_string(),
            show_quotes: true,
            created: Utc::now(),
        }
    }

    /// Load config from .moodjournal/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodjournal").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodJournalError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodJournalError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodJournalError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodjournal/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(".moodjournal");
        let config_path = journal_dir.join("config.toml");

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodJournalError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
