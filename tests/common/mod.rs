use assert_cmd::Command;
use chrono::{DateTime, Local};
use serde_json::json;
use std::fs;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Build one entry in the persisted snapshot shape.
#[allow(dead_code)]
pub fn entry_json(
    id: &str,
    mood: &str,
    content: &str,
    timestamp: DateTime<Local>,
) -> serde_json::Value {
    json!({
        "id": id,
        "mood": mood,
        "content": content,
        "timestamp": timestamp.to_rfc3339(),
        "wordCount": content.split_whitespace().count(),
        "isQuickEntry": false,
    })
}

/// Seed the journal's entries.json directly with the given entries
/// (newest first, as the store keeps them).
#[allow(dead_code)]
pub fn write_snapshot(root: &Path, entries: &[serde_json::Value]) {
    let snapshot = json!({ "version": 1, "entries": entries });
    fs::write(
        root.join(".moodlog/entries.json"),
        serde_json::to_string_pretty(&snapshot).unwrap(),
    )
    .unwrap();
}
