#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn sproutbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sproutbook").unwrap();
    cmd.env_remove("SPROUTBOOK_ROOT");
    cmd.env_remove("RUST_LOG");
    // Days are bucketed in the local zone; pin it so fixtures are stable
    cmd.env("TZ", "UTC");
    cmd
}

/// Initialize a journal at `root` and write `snapshot` as its snapshot file
pub fn init_with_snapshot(root: &Path, snapshot: &str) {
    sproutbook_cmd().arg("init").arg(root).assert().success();
    fs::write(root.join("snapshot.json"), snapshot).unwrap();
}

/// POSIX zone string for UTC+14, where 22:30 UTC is already the next day
pub const FAR_EAST_TZ: &str = "UTC-14";

/// One entry written late in the UTC evening
pub const LATE_ENTRY_SNAPSHOT: &str = r#"{
    "children": [
        {"id": "c1", "parentId": "u1", "name": "Ada", "dateOfBirth": "2024-01-10"}
    ],
    "entries": [
        {"id": "late", "text": "Late night feed", "createdAt": "2024-03-12T22:30:00Z",
         "childIds": ["c1"]}
    ]
}"#;

pub const FAMILY_SNAPSHOT: &str = r#"{
    "users": [{"id": "u1", "displayName": "Sam"}],
    "children": [
        {"id": "c1", "parentId": "u1", "name": "Ada", "dateOfBirth": "2024-01-10", "gender": "female"},
        {"id": "c2", "parentId": "u1", "name": "Max", "dateOfBirth": {"seconds": 1620000000, "nanoseconds": 0}, "gender": "boy"},
        {"id": "c3", "parentId": "u1", "name": "Kit"}
    ],
    "entries": [
        {"id": "e1", "text": "Rolled over for the first time", "createdAt": "2024-03-12T12:00:00Z",
         "childIds": ["c1"], "isMilestone": true},
        {"id": "e2", "text": "Bath time splashes", "createdAt": "2024-02-20T12:00:00Z",
         "childIds": ["c1"], "isFavorited": true},
        {"id": "e3", "text": "Park with cousins", "createdAt": {"seconds": 1710244800, "nanoseconds": 0},
         "childIds": ["c2"], "isFavorited": true},
        {"id": "e4", "text": "Lost the date on this one", "createdAt": "someday",
         "childIds": ["c1"]},
        {"id": "e5", "text": "Kit drew a dog", "createdAt": "2024-03-10T12:00:00Z",
         "childIds": ["c3"], "childAgeAtEntry": {"c3": "4 years"}}
    ],
    "recaps": [
        {"id": "r1", "userId": "u1", "childId": "c1", "type": "weekly",
         "period": {"startDate": "2024-03-03", "endDate": "2024-03-09"},
         "aiGenerated": {"title": "A week of wiggles", "summary": "Tummy time every day"},
         "createdAt": "2024-03-10T08:00:00Z", "isFavorited": true},
        {"id": "r2", "userId": "u1", "childId": "c1", "type": "monthly",
         "period": {"startDate": "2024-02-01", "endDate": "2024-02-29"},
         "aiGenerated": {"title": "February highlights", "summary": "First real laugh"},
         "createdAt": "2024-03-01T08:00:00Z", "isMilestone": true}
    ]
}"#;
