//! File system repository for the journal

use crate::domain::Entry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative path of the persisted entry snapshot
const ENTRIES_FILE: &str = ".moodlog/entries.json";

/// Current snapshot schema version
const SNAPSHOT_VERSION: u32 = 1;

/// On-disk shape of the entry snapshot. The whole collection is written as
/// one value; there is no per-record persistence.
#[derive(Debug, Serialize, Deserialize)]
struct EntriesSnapshot {
    version: u32,
    entries: Vec<Entry>,
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MoodlogError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodlog directory
    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }
}

// Entry snapshot operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Load the persisted entry collection. Missing or undecodable
    /// snapshots yield an empty collection, never an error: corrupt data
    /// means "no entries yet" for a local journal.
    pub fn load_entries(&self) -> Vec<Entry> {
        let path = self.root.join(ENTRIES_FILE);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("could not read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<EntriesSnapshot>(&raw) {
            Ok(snapshot) => snapshot.entries,
            Err(e) => {
                tracing::warn!(
                    "could not decode {}: {}; starting with an empty journal",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Persist the full entry collection as one snapshot, written to a
    /// temp file and renamed into place so readers never see a torn write.
    pub fn save_entries(&self, entries: &[Entry]) -> Result<()> {
        let path = self.root.join(ENTRIES_FILE);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let snapshot = EntriesSnapshot {
            version: SNAPSHOT_VERSION,
            entries: entries.to_vec(),
        };
        let contents = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize entries: {}", e)))?;

        let tmp_path = path.with_file_name(format!("entries.json.tmp-{}", std::process::id()));
        fs::write(&tmp_path, contents)?;

        // Windows rename does not overwrite, remove the destination first
        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
