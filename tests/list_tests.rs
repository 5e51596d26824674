//! Integration tests for the list command

use chrono::{Duration, Local};
use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{entry_json, moodlog_cmd, write_snapshot};

fn init_journal(temp: &TempDir) {
    moodlog_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_list_empty_journal() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_search_filters_by_content() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    let now = Local::now();
    write_snapshot(
        temp.path(),
        &[
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000001",
                "content",
                "tea in the garden",
                now,
            ),
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000002",
                "sad",
                "long commute",
                now - Duration::hours(1),
            ),
        ],
    );

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "TEA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tea in the garden"))
        .stdout(predicate::str::contains("long commute").not());
}

#[test]
fn test_list_search_matches_mood_name() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    let now = Local::now();
    write_snapshot(
        temp.path(),
        &[
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000001",
                "grateful",
                "morning walk",
                now,
            ),
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000002",
                "sad",
                "nothing in particular",
                now - Duration::hours(1),
            ),
        ],
    );

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "grateful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("morning walk"))
        .stdout(predicate::str::contains("nothing in particular").not());
}

#[test]
fn test_list_range_week_excludes_old_entries() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    let now = Local::now();
    write_snapshot(
        temp.path(),
        &[
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000001",
                "content",
                "fresh entry",
                now,
            ),
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000002",
                "content",
                "stale entry",
                now - Duration::days(10),
            ),
        ],
    );

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "--range", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh entry"))
        .stdout(predicate::str::contains("stale entry").not());

    // the full listing still has both
    moodlog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh entry"))
        .stdout(predicate::str::contains("stale entry"));
}

#[test]
fn test_list_limit_truncates() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    let now = Local::now();
    write_snapshot(
        temp.path(),
        &[
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000001",
                "content",
                "first shown",
                now,
            ),
            entry_json(
                "6f2f9a88-0000-4000-8000-000000000002",
                "content",
                "second hidden",
                now - Duration::hours(2),
            ),
        ],
    );

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "1"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("first shown"));
}

#[test]
fn test_list_invalid_range_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["list", "--range", "year"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}
