//! Add entry use case

use crate::domain::classifier;
use crate::domain::entry::validate_fields;
use crate::domain::Classification;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Service for creating journal entries
pub struct AddEntryService {
    repository: FileSystemRepository,
}

impl AddEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AddEntryService { repository }
    }

    /// Validate, classify, and persist a new entry.
    /// Returns the generated id and the classification result.
    pub fn execute(
        &self,
        date: NaiveDate,
        title: &str,
        content: &str,
    ) -> Result<(String, Classification)> {
        validate_fields(title, content)?;

        let classification = classifier::classify(content, &self.repository.profile_path());

        let store = self.repository.entry_store()?;
        let id = store.create(
            date,
            title,
            content,
            classification.mood,
            classification.score,
        )?;

        Ok((id, classification))
    }
}
