//! Entry store - single source of truth for journal entries
//!
//! The store owns the ordered in-memory collection (newest first), loads it
//! once when opened, and writes the full snapshot back after every
//! mutation. Mutations are atomic with respect to the in-memory list even
//! when persistence fails.

use crate::domain::{stats, Entry};
use crate::error::{MoodlogError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::Local;
use uuid::Uuid;

/// Change notification emitted after each successful mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
}

type Observer = Box<dyn Fn(&StoreEvent)>;

/// Owns the journal's entry collection for the lifetime of the process.
pub struct EntryStore {
    repository: FileSystemRepository,
    entries: Vec<Entry>,
    total_entries: usize,
    current_streak: u32,
    observers: Vec<Observer>,
}

impl EntryStore {
    /// Open the store, loading whatever snapshot the repository holds.
    /// Missing or corrupt data is an empty journal, never an error.
    pub fn open(repository: FileSystemRepository) -> Self {
        let entries = repository.load_entries();
        let mut store = EntryStore {
            repository,
            entries,
            total_entries: 0,
            current_streak: 0,
            observers: Vec::new(),
        };
        store.update_counters();
        store
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Register a callback invoked after each successful mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Insert an entry at the front of the collection, persist, and
    /// recompute the derived counters.
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        validate_content(&entry.content)?;

        let id = entry.id;
        self.entries.insert(0, entry);
        self.persist();
        self.update_counters();
        tracing::debug!("added entry {}", id);
        self.notify(StoreEvent::Added(id));
        Ok(())
    }

    /// Remove the entry with the given id. Returns whether anything was
    /// removed; an unknown id is a no-op.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);

        if self.entries.len() == before {
            return false;
        }

        self.persist();
        self.update_counters();
        tracing::debug!("deleted entry {}", id);
        self.notify(StoreEvent::Deleted(id));
        true
    }

    /// Replace the entry with the matching id in place, keeping its
    /// position. The word count is recomputed from the new content. Count
    /// and recency are unaffected, so the counters are left alone. An
    /// unknown id is a no-op.
    pub fn update(&mut self, mut entry: Entry) -> Result<()> {
        validate_content(&entry.content)?;

        let Some(index) = self.entries.iter().position(|e| e.id == entry.id) else {
            return Ok(());
        };

        entry.word_count = crate::domain::entry::count_words(&entry.content);
        let id = entry.id;
        self.entries[index] = entry;
        self.persist();
        tracing::debug!("updated entry {}", id);
        self.notify(StoreEvent::Updated(id));
        Ok(())
    }

    /// Write the full collection back to the repository. Failures are
    /// logged and swallowed: the in-memory state keeps the mutation and a
    /// local journal must not crash its caller over a serialization fault.
    pub fn persist(&self) {
        if let Err(e) = self.repository.save_entries(&self.entries) {
            tracing::error!("failed to persist journal: {}", e);
        }
    }

    fn update_counters(&mut self) {
        self.total_entries = self.entries.len();
        self.current_streak = stats::current_streak(&self.entries, Local::now().date_naive());
    }

    fn notify(&self, event: StoreEvent) {
        for observer in &self.observers {
            observer(&event);
        }
    }
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(MoodlogError::EmptyContent);
    }
    Ok(())
}
