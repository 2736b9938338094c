//! Error types for moodjournal

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodjournal application
#[derive(Debug, Error)]
pub enum MoodJournalError {
    #[error("Not a moodjournal directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Mood profile error: {0}")]
    Profile(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodJournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodJournalError::NotJournalDirectory(_) => 2,
            MoodJournalError::EntryNotFound(_) => 3,
            MoodJournalError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodJournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodjournal directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjournal init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjournal directory\n\
                    • Set MOODJOURNAL_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodJournalError::EntryNotFound(id) => {
                format!(
                    "Entry not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodjournal list' to see entry ids\n\
                    • Ids are full UUIDs (e.g., 550e8400-e29b-41d4-a716-446655440000)",
                    id
                )
            }
            MoodJournalError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Both a title and content are required for a journal entry.\n\
                    Example: moodjournal add --title \"A good day\" --content \"...\"",
                    msg
                )
            }
            MoodJournalError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: moodjournal add --date 2025-01-17 --title ... --content ...",
                    date
                )
            }
            MoodJournalError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: moodjournal config entries_file mood_log.csv",
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

/// Result type using MoodJournalError
pub type Result<T> = std::result::Result<T, MoodJournalError>;
