//! moodjournal - Terminal mood-tracking journal
//!
//! A command-line journaling application that infers an emotional label and
//! sentiment score from free-text entries, persists them to a CSV file, and
//! reports mood history and statistics.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodJournalError;
