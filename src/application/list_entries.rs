//! List entries use case

use crate::domain::{JournalEntry, Mood};
use crate::error::{MoodJournalError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Filters applied when listing entries
#[derive(Debug, Default)]
pub struct EntryFilter {
    pub mood: Option<Mood>,
    /// Case-insensitive substring match over title and content
    pub search: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// List entries newest-first, applying the given filters.
pub fn list_entries(
    repository: &FileSystemRepository,
    filter: &EntryFilter,
) -> Result<Vec<JournalEntry>> {
    let mut entries = repository.entry_store()?.load_all();

    if let Some(mood) = filter.mood {
        entries.retain(|e| e.mood == mood);
    }
    if let Some(query) = &filter.search {
        let query = query.to_lowercase();
        entries.retain(|e| {
            e.title.to_lowercase().contains(&query) || e.content.to_lowercase().contains(&query)
        });
    }
    if let Some(from) = filter.from {
        entries.retain(|e| e.date >= from);
    }
    if let Some(to) = filter.to {
        entries.retain(|e| e.date <= to);
    }

    // Newest first
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(n) = filter.limit {
        entries.truncate(n);
    }

    Ok(entries)
}

/// Fetch a single entry by id.
pub fn get_entry(repository: &FileSystemRepository, id: &str) -> Result<JournalEntry> {
    repository
        .entry_store()?
        .load_all()
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| MoodJournalError::EntryNotFound(id.to_string()))
}
