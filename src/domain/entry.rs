//! Journal entry record

use crate::domain::Mood;
use crate::error::{MoodJournalError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One persisted journal entry.
///
/// Field order matches the CSV column order
/// (`id,date,title,content,mood,mood_score`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    pub mood_score: f64,
}

/// Validate user-supplied entry fields before they reach the store
pub fn validate_fields(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(MoodJournalError::Validation(
            "Title cannot be empty".to_string(),
        ));
    }
    if content.trim().is_empty() {
        return Err(MoodJournalError::Validation(
            "Content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_non_empty() {
        assert!(validate_fields("A title", "Some content").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = validate_fields("", "content").unwrap_err();
        match err {
            MoodJournalError::Validation(msg) => assert!(msg.contains("Title")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_validate_rejects_whitespace_content() {
        let err = validate_fields("title", "   \n\t").unwrap_err();
        match err {
            MoodJournalError::Validation(msg) => assert!(msg.contains("Content")),
            _ => panic!("Expected Validation error"),
        }
    }
}
