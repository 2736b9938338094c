//! CSV-backed journal entry store
//!
//! Every mutation rewrites the full dataset. Entry counts are small for a
//! personal journal, and a full rewrite keeps the file a single consistent
//! snapshot. The rewrite goes through a temp file in the same directory
//! followed by a rename, so a crash mid-write cannot corrupt the data file.

use crate::domain::{JournalEntry, Mood};
use crate::error::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// Durable store for journal entries, keyed by id
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Create a store backed by the given CSV file
    pub fn new(path: PathBuf) -> Self {
        EntryStore { path }
    }

    /// Path of the backing CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted entry.
    ///
    /// A missing file is an empty journal, not an error. Corrupt or
    /// unreadable data is logged and degrades to an empty dataset.
    pub fn load_all(&self) -> Vec<JournalEntry> {
        if !self.path.exists() {
            return Vec::new();
        }

        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to open entries file");
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for record in reader.deserialize() {
            match record {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        error = %e,
                        "malformed entries file, starting with an empty journal"
                    );
                    return Vec::new();
                }
            }
        }

        entries
    }

    /// Append a new entry with a freshly generated id and persist.
    /// Returns the new entry's id.
    pub fn create(
        &self,
        date: NaiveDate,
        title: &str,
        content: &str,
        mood: Mood,
        mood_score: f64,
    ) -> Result<String> {
        let mut entries = self.load_all();

        let id = Uuid::new_v4().to_string();
        entries.push(JournalEntry {
            id: id.clone(),
            date,
            title: title.to_string(),
            content: content.to_string(),
            mood,
            mood_score: mood_score.clamp(-1.0, 1.0),
        });

        self.write_all(&entries)?;
        Ok(id)
    }

    /// Overwrite every field except id on the entry with the given id.
    /// Returns Ok(false), leaving storage untouched, when the id is absent.
    pub fn update(
        &self,
        id: &str,
        date: NaiveDate,
        title: &str,
        content: &str,
        mood: Mood,
        mood_score: f64,
    ) -> Result<bool> {
        let mut entries = self.load_all();

        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };

        entry.date = date;
        entry.title = title.to_string();
        entry.content = content.to_string();
        entry.mood = mood;
        entry.mood_score = mood_score.clamp(-1.0, 1.0);

        self.write_all(&entries)?;
        Ok(true)
    }

    /// Remove the entry with the given id.
    /// Returns Ok(false), leaving storage untouched, when the id is absent.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut entries = self.load_all();

        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }

        self.write_all(&entries)?;
        Ok(true)
    }

    /// Rewrite the full dataset: serialize to a temp file in the same
    /// directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_all(&self, entries: &[JournalEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.csv"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        let mut writer = csv::Writer::from_path(&tmp_path)?;
        for entry in entries {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        drop(writer);

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
