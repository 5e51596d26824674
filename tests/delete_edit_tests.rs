//! Integration tests for delete and edit commands

use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{entry_json, moodlog_cmd, write_snapshot};

const ID_NEWEST: &str = "6f2f9a88-0000-4000-8000-000000000001";
const ID_MIDDLE: &str = "6f2f9a88-0000-4000-8000-000000000002";
const ID_OLDEST: &str = "6f2f9a88-0000-4000-8000-000000000003";

fn seeded_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();

    let now = Local::now();
    write_snapshot(
        temp.path(),
        &[
            entry_json(ID_NEWEST, "focused", "newest entry", now),
            entry_json(ID_MIDDLE, "content", "middle entry", now - Duration::hours(2)),
            entry_json(ID_OLDEST, "sad", "oldest entry", now - Duration::hours(4)),
        ],
    );
    temp
}

#[test]
fn test_delete_removes_entry() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", ID_MIDDLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("middle entry").not())
        .stdout(predicate::str::contains("newest entry"))
        .stdout(predicate::str::contains("oldest entry"));
}

#[test]
fn test_delete_unknown_id_fails() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", "00000000-0000-4000-8000-00000000dead"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No entry found"));
}

#[test]
fn test_delete_malformed_id_fails() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["delete", "not-a-uuid"])
        .assert()
        .failure();
}

#[test]
fn test_edit_message_recomputes_word_count() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", ID_MIDDLE, "-m", "rewritten with exactly five words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry"));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rewritten with exactly five words"))
        .stdout(predicate::str::contains("(5 words)"));
}

#[test]
fn test_edit_mood_only_keeps_content() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", ID_OLDEST, "--mood", "grateful"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("oldest entry"))
        .stdout(predicate::str::contains("Grateful"));
}

#[test]
fn test_edit_preserves_position() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", ID_MIDDLE, "-m", "still in the middle"])
        .assert()
        .success();

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("newest entry"));
    assert!(lines[1].contains("still in the middle"));
    assert!(lines[2].contains("oldest entry"));
}

#[test]
fn test_edit_quick_flag_toggle() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", ID_NEWEST, "--quick"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[quick]"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", ID_NEWEST, "--no-quick"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[quick]").not());
}

#[test]
fn test_edit_unknown_id_fails() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args([
            "edit",
            "00000000-0000-4000-8000-00000000dead",
            "-m",
            "should not land",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No entry found"));
}

#[test]
fn test_edit_rejects_empty_message() {
    let temp = seeded_journal();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["edit", ID_NEWEST, "-m", ""])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("cannot be empty"));
}
