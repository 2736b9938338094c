//! Mood profile: keyword lists and quotes per mood
//!
//! The profile lives in `.moodjournal/moods.toml` and is read-only at
//! runtime. It is loaded on the first classification in the process and
//! cached for the process lifetime; a missing or invalid file is non-fatal
//! (the classifier degrades, see `classifier`).

use crate::domain::Mood;
use crate::error::{MoodJournalError, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Default profile written by `moodjournal init`
pub const DEFAULT_PROFILE_TOML: &str = r#"# Mood keyword and quote configuration.
# Each mood maps to a list of whole-word keywords and one motivational quote.

[moods.joyful]
keywords = ["happy", "joy", "joyful", "excited", "wonderful", "amazing", "great", "fantastic", "delighted", "thrilled", "grateful", "laughed", "celebrate"]
quote = "Happiness is not something ready made. It comes from your own actions."

[moods.peaceful]
keywords = ["calm", "peaceful", "relaxed", "serene", "content", "tranquil", "gentle", "rested", "mindful", "ease"]
quote = "Peace comes from within. Do not seek it without."

[moods.energetic]
keywords = ["energetic", "energized", "active", "pumped", "motivated", "productive", "alive", "vigorous", "workout", "unstoppable"]
quote = "Energy and persistence conquer all things."

[moods.creative]
keywords = ["creative", "inspired", "imaginative", "painting", "drawing", "writing", "composed", "designed", "invented", "brainstormed"]
quote = "Creativity is intelligence having fun."

[moods.neutral]
keywords = ["okay", "fine", "normal", "average", "usual", "ordinary", "routine", "regular"]
quote = "Every day may not be good, but there is something good in every day."

[moods.reflective]
keywords = ["thinking", "reflecting", "pondering", "wondering", "remembering", "memories", "nostalgic", "contemplating", "introspective", "realized"]
quote = "Life can only be understood backwards; but it must be lived forwards."

[moods.anxious]
keywords = ["anxious", "worried", "nervous", "stressed", "overwhelmed", "uneasy", "tense", "afraid", "panic", "dread"]
quote = "You don't have to control your thoughts. You just have to stop letting them control you."

[moods.sad]
keywords = ["sad", "unhappy", "depressed", "down", "miserable", "lonely", "crying", "cried", "grief", "heartbroken", "hopeless"]
quote = "Even the darkest night will end and the sun will rise."

[moods.angry]
keywords = ["angry", "furious", "mad", "annoyed", "irritated", "frustrated", "rage", "outraged", "resentful", "livid"]
quote = "For every minute you remain angry, you give up sixty seconds of peace of mind."

[moods.confused]
keywords = ["confused", "unsure", "uncertain", "puzzled", "torn", "conflicted", "bewildered", "unclear", "undecided"]
quote = "Confusion is the beginning of wisdom."
"#;

#[derive(Debug, Deserialize)]
struct ProfileFile {
    moods: HashMap<String, SectionFile>,
}

#[derive(Debug, Deserialize)]
struct SectionFile {
    keywords: Vec<String>,
    quote: String,
}

#[derive(Debug)]
struct MoodSection {
    quote: String,
    matchers: Vec<Regex>,
}

/// Loaded, validated mood profile with pre-compiled keyword matchers
#[derive(Debug)]
pub struct MoodProfile {
    moods: HashMap<Mood, MoodSection>,
}

impl MoodProfile {
    /// Parse a profile from TOML text.
    ///
    /// Every mood in `Mood::ALL` must be present; unknown labels and
    /// invalid keywords are errors. Keyword matchers are compiled here,
    /// once, as whole-word case-insensitive regexes.
    pub fn from_toml(text: &str) -> Result<Self> {
        let file: ProfileFile = toml::from_str(text)?;

        let mut moods = HashMap::new();
        for (label, section) in file.moods {
            let mood = Mood::from_str(&label).map_err(MoodJournalError::Profile)?;

            let mut matchers = Vec::with_capacity(section.keywords.len());
            for keyword in &section.keywords {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
                let matcher = Regex::new(&pattern).map_err(|e| {
                    MoodJournalError::Profile(format!("Invalid keyword '{}': {}", keyword, e))
                })?;
                matchers.push(matcher);
            }

            moods.insert(
                mood,
                MoodSection {
                    quote: section.quote,
                    matchers,
                },
            );
        }

        for mood in Mood::ALL {
            if !moods.contains_key(&mood) {
                return Err(MoodJournalError::Profile(format!(
                    "Profile is missing a section for mood '{}'",
                    mood
                )));
            }
        }

        Ok(MoodProfile { moods })
    }

    /// Load a profile from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load the profile once per process and cache the outcome.
    ///
    /// The first call fixes the result (including failure) for the process
    /// lifetime. Failure is logged and surfaces as `None`, which the
    /// classifier turns into its Neutral/error-string fallback.
    pub fn cached(path: &Path) -> Option<&'static MoodProfile> {
        static CACHE: OnceLock<Option<MoodProfile>> = OnceLock::new();

        CACHE
            .get_or_init(|| match Self::load(path) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load mood profile");
                    None
                }
            })
            .as_ref()
    }

    /// Count whole-word occurrences of this mood's keywords in the text
    pub fn tally(&self, mood: Mood, text: &str) -> usize {
        self.moods
            .get(&mood)
            .map(|section| {
                section
                    .matchers
                    .iter()
                    .map(|m| m.find_iter(text).count())
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Motivational quote for a mood.
    /// All moods are guaranteed present after a successful load.
    pub fn quote(&self, mood: Mood) -> &str {
        self.moods
            .get(&mood)
            .map(|section| section.quote.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_parses() {
        let profile = MoodProfile::from_toml(DEFAULT_PROFILE_TOML).unwrap();
        for mood in Mood::ALL {
            assert!(!profile.quote(mood).is_empty(), "no quote for {}", mood);
        }
    }

    #[test]
    fn test_tally_counts_whole_words() {
        let profile = MoodProfile::from_toml(DEFAULT_PROFILE_TOML).unwrap();
        // "happiness" must not count as "happy"
        assert_eq!(profile.tally(Mood::Joyful, "happy happy happiness"), 2);
    }

    #[test]
    fn test_tally_case_insensitive() {
        let profile = MoodProfile::from_toml(DEFAULT_PROFILE_TOML).unwrap();
        assert_eq!(profile.tally(Mood::Angry, "FURIOUS and Angry"), 2);
    }

    #[test]
    fn test_tally_zero_for_no_matches() {
        let profile = MoodProfile::from_toml(DEFAULT_PROFILE_TOML).unwrap();
        assert_eq!(profile.tally(Mood::Sad, "a perfectly plain sentence"), 0);
    }

    #[test]
    fn test_missing_mood_section_is_error() {
        let toml = r#"
            [moods.joyful]
            keywords = ["happy"]
            quote = "q"
        "#;
        let err = MoodProfile::from_toml(toml).unwrap_err();
        match err {
            MoodJournalError::Profile(msg) => assert!(msg.contains("missing")),
            other => panic!("Expected Profile error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_mood_label_is_error() {
        let toml = r#"
            [moods.ecstatic]
            keywords = ["wow"]
            quote = "q"
        "#;
        let err = MoodProfile::from_toml(toml).unwrap_err();
        match err {
            MoodJournalError::Profile(msg) => assert!(msg.contains("Invalid mood")),
            other => panic!("Expected Profile error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let result = MoodProfile::from_toml("this is not toml [");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = MoodProfile::load(&temp.path().join("moods.toml"));
        assert!(result.is_err());
    }
}
