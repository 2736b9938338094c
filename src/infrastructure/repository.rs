//! Journal directory discovery and layout

use crate::domain::profile::DEFAULT_PROFILE_TOML;
use crate::error::{MoodJournalError, Result};
use crate::infrastructure::store::EntryStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodjournal/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodjournal/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodjournal directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodjournal directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory.
    /// First checks MOODJOURNAL_ROOT environment variable, then falls back
    /// to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJOURNAL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodJournalError::Config(format!(
                    "MOODJOURNAL_ROOT is set to '{}' but no .moodjournal directory found. \
                    Run 'moodjournal init' in that directory or unset MOODJOURNAL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodJournalError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodjournal directory
    fn has_journal_dir(path: &Path) -> bool {
        path.join(".moodjournal").is_dir()
    }

    /// Path of the mood profile file
    pub fn profile_path(&self) -> PathBuf {
        self.root.join(".moodjournal").join("moods.toml")
    }

    /// Write the built-in default mood profile, unless one already exists
    pub fn write_default_profile(&self) -> Result<()> {
        let path = self.profile_path();
        if path.exists() {
            return Ok(());
        }
        fs::write(&path, DEFAULT_PROFILE_TOML)?;
        Ok(())
    }

    /// Open the entry store for this journal (filename from config)
    pub fn entry_store(&self) -> Result<EntryStore> {
        let config = self.load_config()?;
        Ok(EntryStore::new(self.root.join(&config.entries_file)))
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(".moodjournal");

        if journal_dir.exists() {
            return Err(MoodJournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        Ok(())
    }
}
