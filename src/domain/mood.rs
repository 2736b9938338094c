//! Mood label definitions and sentiment fallback bands

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of mood labels an entry can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mood {
    Joyful,
    Peaceful,
    Energetic,
    Creative,
    #[default]
    Neutral,
    Reflective,
    Anxious,
    Sad,
    Angry,
    Confused,
}

impl Mood {
    /// Every mood, in declaration order.
    ///
    /// This order is load-bearing: keyword-tally ties between moods are
    /// broken by the earliest mood in this array, so classification stays
    /// deterministic regardless of how the profile file orders its sections.
    pub const ALL: [Mood; 10] = [
        Mood::Joyful,
        Mood::Peaceful,
        Mood::Energetic,
        Mood::Creative,
        Mood::Neutral,
        Mood::Reflective,
        Mood::Anxious,
        Mood::Sad,
        Mood::Angry,
        Mood::Confused,
    ];

    /// Map a compound sentiment score to a mood when no keyword matched
    pub fn from_sentiment(score: f64) -> Mood {
        if score >= 0.5 {
            Mood::Joyful
        } else if score >= 0.1 {
            Mood::Peaceful
        } else if score <= -0.5 {
            Mood::Sad
        } else if score <= -0.1 {
            Mood::Anxious
        } else {
            Mood::Neutral
        }
    }

    /// Display name of this mood (same string used in persisted rows)
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Joyful => "Joyful",
            Mood::Peaceful => "Peaceful",
            Mood::Energetic => "Energetic",
            Mood::Creative => "Creative",
            Mood::Neutral => "Neutral",
            Mood::Reflective => "Reflective",
            Mood::Anxious => "Anxious",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Confused => "Confused",
        }
    }

    /// Emoji shown next to the mood in CLI output
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Joyful => "😊",
            Mood::Peaceful => "😌",
            Mood::Energetic => "⚡",
            Mood::Creative => "🎨",
            Mood::Neutral => "😐",
            Mood::Reflective => "🤔",
            Mood::Anxious => "😰",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Confused => "😕",
        }
    }

    /// One-line wellbeing tip for this mood
    pub fn tip(&self) -> &'static str {
        match self {
            Mood::Joyful => {
                "Great mood! Consider journaling about what made you happy today to remember it in the future."
            }
            Mood::Peaceful => {
                "Your peaceful state is valuable. Consider practicing mindfulness to maintain this balance."
            }
            Mood::Energetic => "Channel your energy into productive activities or creative pursuits.",
            Mood::Creative => {
                "Your creative energy is flowing! Consider starting a new project or exploring new ideas."
            }
            Mood::Neutral => "Keep journaling regularly to track changes in your mood over time.",
            Mood::Reflective => {
                "Your reflective state is perfect for personal growth. Consider setting new goals or intentions."
            }
            Mood::Anxious => {
                "Practice deep breathing exercises or try the 5-4-3-2-1 grounding technique to reduce anxiety."
            }
            Mood::Sad => {
                "Take a deep breath. Consider doing something you enjoy or reach out to a friend."
            }
            Mood::Angry => "Try taking a short walk or practice deep breathing to calm down.",
            Mood::Confused => {
                "It's okay to feel uncertain. Take time to reflect and break down your thoughts into smaller pieces."
            }
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "joyful" => Ok(Mood::Joyful),
            "peaceful" => Ok(Mood::Peaceful),
            "energetic" => Ok(Mood::Energetic),
            "creative" => Ok(Mood::Creative),
            "neutral" => Ok(Mood::Neutral),
            "reflective" => Ok(Mood::Reflective),
            "anxious" => Ok(Mood::Anxious),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "confused" => Ok(Mood::Confused),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: joyful, peaceful, energetic, creative, \
                neutral, reflective, anxious, sad, angry, confused",
                s
            )),
        }
    }
}
