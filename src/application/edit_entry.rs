//! Edit entry use case

use crate::domain::classifier;
use crate::domain::entry::validate_fields;
use crate::domain::{Classification, JournalEntry};
use crate::error::{MoodJournalError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Fields to change on an existing entry; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct EditFields {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Service for editing journal entries
pub struct EditEntryService {
    repository: FileSystemRepository,
}

impl EditEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        EditEntryService { repository }
    }

    /// Merge the given fields over the stored entry, re-classify the final
    /// content, and persist. The id never changes.
    pub fn execute(&self, id: &str, fields: EditFields) -> Result<(JournalEntry, Classification)> {
        let store = self.repository.entry_store()?;

        let existing = store
            .load_all()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| MoodJournalError::EntryNotFound(id.to_string()))?;

        let date = fields.date.unwrap_or(existing.date);
        let title = fields.title.unwrap_or(existing.title);
        let content = fields.content.unwrap_or(existing.content);

        validate_fields(&title, &content)?;

        let classification = classifier::classify(&content, &self.repository.profile_path());

        let updated = store.update(
            id,
            date,
            &title,
            &content,
            classification.mood,
            classification.score,
        )?;
        if !updated {
            return Err(MoodJournalError::EntryNotFound(id.to_string()));
        }

        Ok((
            JournalEntry {
                id: id.to_string(),
                date,
                title,
                content,
                mood: classification.mood,
                mood_score: classification.score,
            },
            classification,
        ))
    }
}
