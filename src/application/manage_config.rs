//! Config management use case

use crate::error::{MoodJournalError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "entries_file" => Ok(config.entries_file.clone()),
            "show_quotes" => Ok(config.show_quotes.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodJournalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: entries_file, show_quotes, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "entries_file" => {
                if value.trim().is_empty() {
                    return Err(MoodJournalError::Config(
                        "entries_file cannot be empty".to_string(),
                    ));
                }
                config.entries_file = value.to_string();
            }
            "show_quotes" => {
                config.show_quotes = value.parse().map_err(|_| {
                    MoodJournalError::Config(format!(
                        "Invalid value for show_quotes: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(MoodJournalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodJournalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: entries_file, show_quotes",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_defaults() {
        let (_temp, service) = service();
        assert_eq!(service.get("entries_file").unwrap(), "journal_entries.csv");
        assert_eq!(service.get("show_quotes").unwrap(), "true");
    }

    #[test]
    fn test_set_and_get() {
        let (_temp, service) = service();
        service.set("entries_file", "mood_log.csv").unwrap();
        assert_eq!(service.get("entries_file").unwrap(), "mood_log.csv");

        service.set("show_quotes", "false").unwrap();
        assert_eq!(service.get("show_quotes").unwrap(), "false");
    }

    #[test]
    fn test_set_invalid_bool() {
        let (_temp, service) = service();
        assert!(service.set("show_quotes", "maybe").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.set("created", "2025-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        assert!(service.get("nope").is_err());
        assert!(service.set("nope", "x").is_err());
    }
}
