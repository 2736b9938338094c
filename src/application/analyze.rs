//! Classification preview use case

use crate::domain::{classifier, Classification};
use crate::infrastructure::FileSystemRepository;

/// Classify text without saving anything.
/// Used for previewing the mood of a draft entry.
pub fn analyze(repository: &FileSystemRepository, text: &str) -> Classification {
    classifier::classify(text, &repository.profile_path())
}
