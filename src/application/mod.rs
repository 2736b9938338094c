//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod analyze;
pub mod delete_entry;
pub mod edit_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod stats;

pub use add_entry::AddEntryService;
pub use edit_entry::{EditEntryService, EditFields};
pub use list_entries::EntryFilter;
pub use manage_config::ConfigService;
pub use stats::MoodStats;
