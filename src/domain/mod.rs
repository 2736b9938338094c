//! Domain layer - Mood model and classification logic

pub mod classifier;
pub mod entry;
pub mod mood;
pub mod profile;
pub mod sentiment;

pub use classifier::Classification;
pub use entry::JournalEntry;
pub use mood::Mood;
pub use profile::MoodProfile;
pub use sentiment::{LexiconScorer, SentimentScorer};
