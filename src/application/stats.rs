//! Mood statistics use case

use crate::domain::{JournalEntry, Mood};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Aggregate mood statistics over a set of entries
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStats {
    pub total: usize,
    pub average_score: f64,
    pub most_common: Option<Mood>,
    /// Entry counts per mood, in `Mood::ALL` order; zero counts included
    pub counts: Vec<(Mood, usize)>,
}

impl MoodStats {
    /// Compute statistics from a slice of entries.
    /// Most-common ties break to the earliest mood in `Mood::ALL`.
    pub fn compute(entries: &[JournalEntry]) -> MoodStats {
        let total = entries.len();

        let average_score = if total == 0 {
            0.0
        } else {
            entries.iter().map(|e| e.mood_score).sum::<f64>() / total as f64
        };

        let counts: Vec<(Mood, usize)> = Mood::ALL
            .iter()
            .map(|&mood| (mood, entries.iter().filter(|e| e.mood == mood).count()))
            .collect();

        let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let most_common = if max_count == 0 {
            None
        } else {
            // First mood reaching the maximum wins ties
            counts
                .iter()
                .find(|(_, count)| *count == max_count)
                .map(|(mood, _)| *mood)
        };

        MoodStats {
            total,
            average_score,
            most_common,
            counts,
        }
    }
}

/// Compute statistics over the stored entries, optionally date-bounded.
pub fn mood_stats(
    repository: &FileSystemRepository,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<MoodStats> {
    let mut entries = repository.entry_store()?.load_all();

    if let Some(from) = from {
        entries.retain(|e| e.date >= from);
    }
    if let Some(to) = to {
        entries.retain(|e| e.date <= to);
    }

    Ok(MoodStats::compute(&entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, mood: Mood, score: f64) -> JournalEntry {
        JournalEntry {
            id: format!("{}-{}", date, mood),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            title: "t".to_string(),
            content: "c".to_string(),
            mood,
            mood_score: score,
        }
    }

    #[test]
    fn test_compute_empty() {
        let stats = MoodStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.most_common, None);
        assert!(stats.counts.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_compute_counts_and_average() {
        let entries = vec![
            entry("2025-01-15", Mood::Joyful, 0.8),
            entry("2025-01-16", Mood::Joyful, 0.6),
            entry("2025-01-17", Mood::Sad, -0.4),
        ];

        let stats = MoodStats::compute(&entries);
        assert_eq!(stats.total, 3);
        assert!((stats.average_score - (0.8 + 0.6 - 0.4) / 3.0).abs() < 1e-9);
        assert_eq!(stats.most_common, Some(Mood::Joyful));

        let joyful = stats.counts.iter().find(|(m, _)| *m == Mood::Joyful).unwrap();
        assert_eq!(joyful.1, 2);
    }

    #[test]
    fn test_most_common_tie_breaks_to_earliest() {
        let entries = vec![
            entry("2025-01-15", Mood::Sad, -0.4),
            entry("2025-01-16", Mood::Peaceful, 0.3),
        ];

        // One each: Peaceful precedes Sad in Mood::ALL
        let stats = MoodStats::compute(&entries);
        assert_eq!(stats.most_common, Some(Mood::Peaceful));
    }
}
