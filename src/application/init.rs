//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    // Ship the default keyword/quote profile so classification works out
    // of the box; users can edit .moodjournal/moods.toml afterwards.
    repo.write_default_profile()?;

    println!("Initialized mood journal at {}", path.display());
    println!("Entries file: {}", config.entries_file);

    Ok(())
}
