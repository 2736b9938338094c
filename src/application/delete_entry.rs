//! Delete entry use case

use crate::error::{MoodJournalError, Result};
use crate::infrastructure::FileSystemRepository;

/// Delete an entry by id. Unknown ids leave storage untouched.
pub fn delete_entry(repository: &FileSystemRepository, id: &str) -> Result<()> {
    let store = repository.entry_store()?;

    if !store.delete(id)? {
        return Err(MoodJournalError::EntryNotFound(id.to_string()));
    }

    Ok(())
}
