//! Mood classification: keyword tally with sentiment fallback

use crate::domain::profile::MoodProfile;
use crate::domain::sentiment::{LexiconScorer, SentimentScorer};
use crate::domain::Mood;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Quote placeholder returned when the mood profile is unavailable
pub const PROFILE_ERROR_QUOTE: &str = "Error loading mood data";

/// Outcome of classifying one entry's text
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub mood: Mood,
    pub score: f64,
    pub quote: String,
}

fn url_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:https?://|www\.)\S+").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Normalize entry text before scoring and keyword matching:
/// lowercase, strip URL tokens, collapse whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = url_regex().replace_all(&lowered, "");
    whitespace_regex()
        .replace_all(&without_urls, " ")
        .trim()
        .to_string()
}

/// Classify text against an explicit profile and scorer.
///
/// The mood with the highest keyword tally wins; ties break to the earliest
/// mood in `Mood::ALL`. When no keyword matches at all, the sentiment score
/// bands decide (`Mood::from_sentiment`). A `None` profile degrades to
/// Neutral with [`PROFILE_ERROR_QUOTE`] in place of a quote.
pub fn classify_with(
    text: &str,
    profile: Option<&MoodProfile>,
    scorer: &dyn SentimentScorer,
) -> Classification {
    let clean = normalize(text);
    let score = scorer.score(&clean).clamp(-1.0, 1.0);

    let Some(profile) = profile else {
        return Classification {
            mood: Mood::Neutral,
            score,
            quote: PROFILE_ERROR_QUOTE.to_string(),
        };
    };

    let mut best = Mood::ALL[0];
    let mut best_tally = 0usize;
    for mood in Mood::ALL {
        let tally = profile.tally(mood, &clean);
        // Strict comparison keeps the earliest mood on ties
        if tally > best_tally {
            best = mood;
            best_tally = tally;
        }
    }

    let mood = if best_tally == 0 {
        Mood::from_sentiment(score)
    } else {
        best
    };

    Classification {
        mood,
        score,
        quote: profile.quote(mood).to_string(),
    }
}

/// Classify text with the process-wide cached profile and the built-in
/// lexicon scorer. Profile load failure is non-fatal.
pub fn classify(text: &str, profile_path: &Path) -> Classification {
    classify_with(text, MoodProfile::cached(profile_path), &LexiconScorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::DEFAULT_PROFILE_TOML;

    /// Scorer returning a fixed compound score
    struct FixedScorer(f64);

    impl SentimentScorer for FixedScorer {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn default_profile() -> MoodProfile {
        MoodProfile::from_toml(DEFAULT_PROFILE_TOML).unwrap()
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  Hello   WORLD  "), "hello world");
    }

    #[test]
    fn test_normalize_strips_urls() {
        assert_eq!(
            normalize("check https://example.com/page and www.example.org today"),
            "check and today"
        );
    }

    #[test]
    fn test_normalize_collapses_newlines() {
        assert_eq!(normalize("one\n\ntwo\tthree"), "one two three");
    }

    #[test]
    fn test_keyword_tally_wins_regardless_of_score_sign() {
        // "happy" twice, no other keywords; a negative sentiment score
        // must not override the tally-driven choice.
        let profile = default_profile();
        let result = classify_with("happy then happy again", Some(&profile), &FixedScorer(-0.9));
        assert_eq!(result.mood, Mood::Joyful);
    }

    #[test]
    fn test_furious_and_angry_classifies_angry() {
        let profile = default_profile();
        let result = classify_with(
            "I am furious and angry today",
            Some(&profile),
            &LexiconScorer,
        );
        assert_eq!(result.mood, Mood::Angry);
        assert_eq!(profile.tally(Mood::Angry, "i am furious and angry today"), 2);
    }

    #[test]
    fn test_fallback_joyful_band() {
        // No keywords anywhere, score 0.72 → Joyful via the ≥0.5 band
        let profile = default_profile();
        let result = classify_with("nothing notable here", Some(&profile), &FixedScorer(0.72));
        assert_eq!(result.mood, Mood::Joyful);
        assert_eq!(result.score, 0.72);
    }

    #[test]
    fn test_empty_text_is_deterministic() {
        let profile = default_profile();
        let result = classify_with("", Some(&profile), &LexiconScorer);
        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_missing_profile_degrades() {
        let result = classify_with("happy happy happy", None, &FixedScorer(0.3));
        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.score, 0.3);
        assert_eq!(result.quote, PROFILE_ERROR_QUOTE);
    }

    #[test]
    fn test_score_clamped_to_range() {
        let profile = default_profile();
        let result = classify_with("whatever", Some(&profile), &FixedScorer(7.5));
        assert_eq!(result.score, 1.0);
        let result = classify_with("whatever", Some(&profile), &FixedScorer(-7.5));
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_tie_breaks_to_earliest_mood() {
        // One Joyful keyword and one Angry keyword: Joyful is earlier
        // in Mood::ALL, so it wins the tie.
        let profile = default_profile();
        let result = classify_with("happy but furious", Some(&profile), &FixedScorer(0.0));
        assert_eq!(result.mood, Mood::Joyful);
    }

    #[test]
    fn test_quote_matches_final_mood() {
        let profile = default_profile();
        let result = classify_with("I am so sad and lonely", Some(&profile), &LexiconScorer);
        assert_eq!(result.mood, Mood::Sad);
        assert_eq!(result.quote, profile.quote(Mood::Sad));
    }

    #[test]
    fn test_fallback_bands_through_classifier() {
        let profile = default_profile();
        let cases = [
            (0.72, Mood::Joyful),
            (0.3, Mood::Peaceful),
            (0.0, Mood::Neutral),
            (-0.3, Mood::Anxious),
            (-0.7, Mood::Sad),
        ];
        for (score, expected) in cases {
            let result = classify_with("nothing notable here", Some(&profile), &FixedScorer(score));
            assert_eq!(result.mood, expected, "score {}", score);
        }
    }

    #[test]
    fn test_url_does_not_leak_keywords() {
        // A URL containing a keyword must be stripped before matching
        let profile = default_profile();
        let result = classify_with(
            "see https://example.com/happy-happy for details",
            Some(&profile),
            &FixedScorer(0.0),
        );
        assert_eq!(result.mood, Mood::Neutral);
    }
}
