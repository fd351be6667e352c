//! Integration tests for week command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{
    init_with_snapshot, sproutbook_cmd, FAMILY_SNAPSHOT, FAR_EAST_TZ, LATE_ENTRY_SNAPSHOT,
};

#[test]
fn test_week_empty_journal() {
    let temp = TempDir::new().unwrap();
    sproutbook_cmd().arg("init").arg(temp.path()).assert().success();

    let output = sproutbook_cmd()
        .current_dir(temp.path())
        .args(["week", "--on", "13-03-2024"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Week of 10-03-2024");
    assert_eq!(lines[1], "Sun 10-03  [ ]");
    assert_eq!(lines[4], "Wed 13-03  [*] today");
    assert_eq!(lines[7], "Sat 16-03  [ ]");
    assert_eq!(lines[8], "Entries: 0  Completed days: 0  Missed days: 3");
}

#[test]
fn test_week_all_children() {
    let temp = TempDir::new().unwrap();
    init_with_snapshot(temp.path(), FAMILY_SNAPSHOT);

    sproutbook_cmd()
        .current_dir(temp.path())
        .args(["week", "--on", "13-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun 10-03  [x]"))
        .stdout(predicate::str::contains("Mon 11-03  [ ]"))
        .stdout(predicate::str::contains("Tue 12-03  [x]"))
        .stdout(predicate::str::contains(
            "Entries: 3  Completed days: 2  Missed days: 1",
        ))
        .stdout(predicate::str::contains("Skipped 1 entries without a valid date"));
}

#[test]
fn test_week_single_child() {
    let temp = TempDir::new().unwrap();
    init_with_snapshot(temp.path(), FAMILY_SNAPSHOT);

    sproutbook_cmd()
        .current_dir(temp.path())
        .args(["week", "--child", "c1", "--on", "13-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun 10-03  [ ]"))
        .stdout(predicate::str::contains("Tue 12-03  [x]"))
        .stdout(predicate::str::contains(
            "Entries: 1  Completed days: 1  Missed days: 2",
        ));
}

#[test]
fn test_week_on_sunday_has_no_past_days() {
    let temp = TempDir::new().unwrap();
    init_with_snapshot(temp.path(), FAMILY_SNAPSHOT);

    sproutbook_cmd()
        .current_dir(temp.path())
        .args(["week", "--on", "10-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sun 10-03  [*] today"))
        .stdout(predicate::str::contains("Tue 12-03  [ ]"))
        .stdout(predicate::str::contains("Missed days: 0"));
}

#[test]
fn test_week_rejects_backwards_recap_period() {
    let temp = TempDir::new().unwrap();
    sproutbook_cmd().arg("init").arg(temp.path()).assert().success();
    fs::write(
        temp.path().join("snapshot.json"),
        r#"{"recaps": [{"id": "bad", "userId": "u1", "childId": "c1", "type": "weekly",
            "period": {"startDate": "2024-03-09", "endDate": "2024-03-03"}}]}"#,
    )
    .unwrap();

    sproutbook_cmd()
        .current_dir(temp.path())
        .args(["week", "--on", "13-03-2024"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid recap period for 'bad'"));
}

#[test]
fn test_week_buckets_days_in_local_zone() {
    let temp = TempDir::new().unwrap();
    init_with_snapshot(temp.path(), LATE_ENTRY_SNAPSHOT);

    sproutbook_cmd()
        .current_dir(temp.path())
        .args(["week", "--on", "14-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tue 12-03  [x]"))
        .stdout(predicate::str::contains("Wed 13-03  [ ]"));

    sproutbook_cmd()
        .current_dir(temp.path())
        .env("TZ", FAR_EAST_TZ)
        .args(["week", "--on", "14-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tue 12-03  [ ]"))
        .stdout(predicate::str::contains("Wed 13-03  [x]"))
        .stdout(predicate::str::contains(
            "Entries: 1  Completed days: 1  Missed days: 3",
        ));
}
