//! Compound sentiment scoring
//!
//! The classifier only needs a single polarity number in [-1, 1] per text,
//! so the scorer sits behind a trait and the built-in implementation is a
//! small valence lexicon with one-step negation handling. Tests that need an
//! exact score substitute their own scorer through the trait.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Produces a compound sentiment polarity in [-1, 1] for a text.
pub trait SentimentScorer {
    /// Score normalized text; -1 is most negative, +1 most positive.
    fn score(&self, text: &str) -> f64;
}

/// Built-in lexicon-based scorer.
///
/// Sums per-word valences (flipping the sign when one of the two preceding
/// tokens is a negator) and squashes the sum into [-1, 1] with
/// `x / sqrt(x^2 + 15)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconScorer;

/// Word valences, roughly on a -3..3 scale
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("delicious", 2.3),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 2.2),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("grateful", 2.3),
    ("great", 3.1),
    ("happy", 2.7),
    ("hope", 1.9),
    ("laugh", 2.6),
    ("laughed", 2.6),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("proud", 2.2),
    ("relaxed", 2.2),
    ("smile", 2.1),
    ("success", 2.7),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("win", 2.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.8),
    ("annoying", -1.9),
    ("anxious", -1.9),
    ("awful", -2.0),
    ("bad", -2.5),
    ("broke", -1.4),
    ("cried", -2.1),
    ("cry", -2.2),
    ("depressed", -2.7),
    ("disappointed", -2.2),
    ("disappointing", -2.1),
    ("fail", -2.3),
    ("failed", -2.4),
    ("fear", -2.2),
    ("furious", -2.7),
    ("hate", -2.7),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("lonely", -2.0),
    ("lost", -1.3),
    ("mad", -2.2),
    ("miserable", -2.7),
    ("nightmare", -2.6),
    ("pain", -2.3),
    ("problem", -1.5),
    ("problems", -1.6),
    ("sad", -2.1),
    ("sick", -1.7),
    ("stress", -1.8),
    ("stressed", -1.9),
    ("terrible", -2.1),
    ("tired", -1.3),
    ("upset", -1.9),
    ("worried", -1.8),
    ("worst", -3.1),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nothing", "neither", "nor", "hardly", "barely", "cannot",
    "cant", "dont", "didnt", "doesnt", "isnt", "wasnt", "wont", "couldnt", "shouldnt", "wouldnt",
];

fn lexicon() -> &'static HashMap<&'static str, f64> {
    static MAP: OnceLock<HashMap<&'static str, f64>> = OnceLock::new();
    MAP.get_or_init(|| LEXICON.iter().copied().collect())
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}

/// Split text into lowercase word tokens, dropping punctuation.
/// Apostrophes are stripped so "don't" becomes "dont".
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.replace('\'', ""))
        .filter(|w| !w.is_empty())
        .collect()
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut sum = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&valence) = lexicon().get(token.as_str()) else {
                continue;
            };

            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|t| is_negator(t));

            sum += if negated { -valence } else { valence };
        }

        if sum == 0.0 {
            return 0.0;
        }

        // Squash into (-1, 1)
        (sum / (sum * sum + 15.0).sqrt()).clamp(-1.0, 1.0)
    }
}
