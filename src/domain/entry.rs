//! Journaled mood entries

use crate::domain::Mood;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One journaled mood record.
///
/// Serialized field names are camelCase so persisted snapshots keep a stable
/// wire shape (`wordCount`, `isQuickEntry`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: Uuid,
    pub mood: Mood,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Whitespace-token count of `content`. Computed at creation; only the
    /// store's update operation recomputes it afterwards.
    pub word_count: usize,
    pub is_quick_entry: bool,
}

impl Entry {
    /// Create an entry timestamped now, with the word count derived from
    /// the content.
    pub fn new(mood: Mood, content: impl Into<String>) -> Self {
        Self::with_timestamp(mood, content, Local::now())
    }

    /// Create an entry at an explicit timestamp (bulk import, tests).
    /// Ids are random v4, so same-instant creation still yields unique ids.
    pub fn with_timestamp(
        mood: Mood,
        content: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        let content = content.into();
        let word_count = count_words(&content);
        Entry {
            id: Uuid::new_v4(),
            mood,
            content,
            timestamp,
            word_count,
            is_quick_entry: false,
        }
    }

    /// Mark this entry as a quick entry
    pub fn quick(mut self) -> Self {
        self.is_quick_entry = true;
        self
    }
}

/// Count whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
