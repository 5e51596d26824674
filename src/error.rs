//! Error types for moodlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Unknown mood: {0}")]
    InvalidMood(String),

    #[error("Entry content cannot be empty")]
    EmptyContent,

    #[error("No entry found with id: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotJournalDirectory(_) => 2,
            MoodlogError::InvalidMood(_) => 3,
            MoodlogError::EntryNotFound(_) => 4,
            MoodlogError::EmptyContent => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodlog journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to create a new journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set MOODLOG_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodlogError::InvalidMood(name) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Valid moods:\n\
                    • content, grateful, focused, anxious, frustrated, sad\n\n\
                    Examples:\n\
                    moodlog add grateful -m \"Morning walk in the sun\"\n\
                    moodlog add sad",
                    name
                )
            }
            MoodlogError::EmptyContent => {
                "Entry content cannot be empty\n\n\
                Suggestions:\n\
                • Pass the reflection text with -m \"your text\"\n\
                • Without -m, write the reflection in the editor before saving"
                    .to_string()
            }
            MoodlogError::EntryNotFound(id) => {
                format!(
                    "No entry found with id: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodlog list' to see entry ids\n\
                    • Ids must be given in full (as printed by list)",
                    id
                )
            }
            MoodlogError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodlog config editor 'vim'",
                    msg
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: editor, created\n\
                        Example: moodlog config editor 'vim'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
