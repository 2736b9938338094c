//! Output formatting utilities

use crate::application::MoodStats;
use crate::domain::{Classification, JournalEntry};

/// Format a list of entries for display, one line per entry
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:+.2}  {:<10}  {}  {}\n",
            entry.date.format("%Y-%m-%d"),
            entry.mood_score,
            entry.mood.label(),
            entry.id,
            entry.title
        ));
    }
    output
}

/// Format a single entry in full
pub fn format_entry(entry: &JournalEntry) -> String {
    format!(
        "{} ({})\nMood: {} {} (score {:+.2})\nId: {}\n\n{}\n",
        entry.title,
        entry.date.format("%Y-%m-%d"),
        entry.mood.emoji(),
        entry.mood,
        entry.mood_score,
        entry.id,
        entry.content
    )
}

/// Format a classification result (after add/edit/analyze)
pub fn format_classification(classification: &Classification, show_quote: bool) -> String {
    let mut output = format!(
        "Detected mood: {} {} (score {:+.2})\n",
        classification.mood.emoji(),
        classification.mood,
        classification.score
    );
    if show_quote {
        output.push_str(&format!("\"{}\"\n", classification.quote));
    }
    output.push_str(&format!("Tip: {}\n", classification.mood.tip()));
    output
}

/// Format mood statistics with a text histogram
pub fn format_stats(stats: &MoodStats) -> String {
    if stats.total == 0 {
        return "No entries found".to_string();
    }

    let mut output = format!(
        "Entries: {}\nAverage score: {:+.2}\n",
        stats.total, stats.average_score
    );
    if let Some(mood) = stats.most_common {
        output.push_str(&format!("Most common mood: {}\n", mood));
    }

    output.push('\n');
    for (mood, count) in &stats.counts {
        if *count == 0 {
            continue;
        }
        output.push_str(&format!(
            "{:<10} {} {}\n",
            mood.label(),
            "█".repeat(*count),
            count
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;
    use chrono::NaiveDate;

    fn entry() -> JournalEntry {
        JournalEntry {
            id: "abc-123".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            title: "A good day".to_string(),
            content: "happy happy".to_string(),
            mood: Mood::Joyful,
            mood_score: 0.72,
        }
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_entry_list(&[]);
        assert_eq!(output, "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let output = format_entry_list(&[entry()]);
        assert!(output.contains("2025-01-17"));
        assert!(output.contains("+0.72"));
        assert!(output.contains("Joyful"));
        assert!(output.contains("abc-123"));
        assert!(output.contains("A good day"));
    }

    #[test]
    fn test_format_entry_includes_content() {
        let output = format_entry(&entry());
        assert!(output.contains("A good day (2025-01-17)"));
        assert!(output.contains("Mood: 😊 Joyful (score +0.72)"));
        assert!(output.contains("Id: abc-123"));
        assert!(output.contains("happy happy"));
    }

    #[test]
    fn test_format_classification_with_quote() {
        let classification = Classification {
            mood: Mood::Sad,
            score: -0.6,
            quote: "a quote".to_string(),
        };

        let output = format_classification(&classification, true);
        assert!(output.contains("Detected mood: 😢 Sad (score -0.60)"));
        assert!(output.contains("\"a quote\""));
        assert!(output.contains("Tip:"));
    }

    #[test]
    fn test_format_classification_without_quote() {
        let classification = Classification {
            mood: Mood::Sad,
            score: -0.6,
            quote: "a quote".to_string(),
        };

        let output = format_classification(&classification, false);
        assert!(!output.contains("a quote"));
        assert!(output.contains("Tip:"));
    }

    #[test]
    fn test_format_stats() {
        let stats = MoodStats::compute(&[entry(), entry()]);
        let output = format_stats(&stats);
        assert!(output.contains("Entries: 2"));
        assert!(output.contains("Average score: +0.72"));
        assert!(output.contains("Most common mood: Joyful"));
        assert!(output.contains("Joyful     ██ 2"));
        // Moods with no entries are omitted from the histogram
        assert!(!output.contains("Confused"));
    }

    #[test]
    fn test_format_stats_empty() {
        let stats = MoodStats::compute(&[]);
        assert_eq!(format_stats(&stats), "No entries found");
    }
}
