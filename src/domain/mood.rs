//! Mood definitions and valence scoring

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of moods an entry can carry.
///
/// Each mood has a display name, an emoji glyph, and an integer valence
/// score (1-5) used when averaging moods over a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Content,
    Grateful,
    Focused,
    Anxious,
    Frustrated,
    Sad,
}

/// All moods in display order.
pub const ALL_MOODS: [Mood; 6] = [
    Mood::Content,
    Mood::Grateful,
    Mood::Focused,
    Mood::Anxious,
    Mood::Frustrated,
    Mood::Sad,
];

impl Mood {
    /// The lowercase tag this mood serializes to; also what text search
    /// matches against.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Content => "content",
            Mood::Grateful => "grateful",
            Mood::Focused => "focused",
            Mood::Anxious => "anxious",
            Mood::Frustrated => "frustrated",
            Mood::Sad => "sad",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Mood::Content => "Content",
            Mood::Grateful => "Grateful",
            Mood::Focused => "Focused",
            Mood::Anxious => "Anxious",
            Mood::Frustrated => "Frustrated",
            Mood::Sad => "Sad",
        }
    }

    /// Emoji glyph for display
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Content => "😌",
            Mood::Grateful => "🙏",
            Mood::Focused => "🎯",
            Mood::Anxious => "😟",
            Mood::Frustrated => "😤",
            Mood::Sad => "😔",
        }
    }

    /// Numeric valence (1-5) used for averaging
    pub fn valence(&self) -> i32 {
        match self {
            Mood::Content => 4,
            Mood::Grateful => 5,
            Mood::Focused => 4,
            Mood::Anxious => 2,
            Mood::Frustrated => 2,
            Mood::Sad => 1,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content" => Ok(Mood::Content),
            "grateful" => Ok(Mood::Grateful),
            "focused" => Ok(Mood::Focused),
            "anxious" => Ok(Mood::Anxious),
            "frustrated" => Ok(Mood::Frustrated),
            "sad" => Ok(Mood::Sad),
            _ => Err(format!(
                "Unknown mood: '{}'. Valid moods are: content, grateful, focused, anxious, frustrated, sad",
                s
            )),
        }
    }
}
