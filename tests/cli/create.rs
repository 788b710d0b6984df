use crate::support::{fleet, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// New command tests
// ============================================================================

fn is_identifier(stem: &str, len: usize) -> bool {
    stem.len() == len
        && stem
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
}

#[test]
fn test_new_creates_note_with_default_body() {
    let dir = tempdir().unwrap();

    let output = fleet(dir.path())
        .args(["new", "--no-open"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let name = printed.strip_prefix("fleeting/").expect("path under fleeting/");
    let stem = name.strip_suffix(".md").expect("markdown file");
    assert!(is_identifier(stem, 6), "unexpected identifier {}", stem);

    let content = fs::read_to_string(dir.path().join(&printed)).unwrap();
    assert_eq!(content, "# Fleeting\n");
}

#[test]
fn test_create_alias() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["create", "--no-open"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fleeting/"));
}

#[test]
fn test_new_without_terminal_does_not_launch_editor() {
    let dir = tempdir().unwrap();

    // EDITOR would fail loudly if it were ever run
    fleet(dir.path())
        .env("EDITOR", "false")
        .arg("new")
        .assert()
        .success();
}

#[test]
fn test_new_json_output() {
    let dir = tempdir().unwrap();

    let output = fleet(dir.path())
        .args(["--format", "json", "new"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let id = json["id"].as_str().unwrap();
    assert!(is_identifier(id, 6));
    assert_eq!(json["name"], format!("{}.md", id));
    assert!(dir.path().join("fleeting").join(format!("{}.md", id)).exists());
}

#[test]
fn test_new_notes_are_distinct() {
    let dir = tempdir().unwrap();

    for _ in 0..5 {
        fleet(dir.path())
            .args(["new", "--no-open"])
            .assert()
            .success();
    }
    assert_eq!(fs::read_dir(dir.path().join("fleeting")).unwrap().count(), 5);
}

#[test]
fn test_new_uses_configured_length_and_path() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "set", "len", "4"])
        .assert()
        .success();
    fleet(dir.path())
        .args(["config", "set", "path", "inbox/fleeting"])
        .assert()
        .success();

    let output = fleet(dir.path())
        .args(["--format", "json", "new"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let id = stdout_json(&output)["id"].as_str().unwrap().to_string();
    assert!(is_identifier(&id, 4));
    assert!(dir
        .path()
        .join("inbox/fleeting")
        .join(format!("{}.md", id))
        .exists());
}

#[test]
fn test_new_fails_when_locked() {
    let dir = tempdir().unwrap();
    let fleeting = dir.path().join("fleeting");
    fs::create_dir_all(&fleeting).unwrap();
    fs::write(fleeting.join(".fleet.lock"), "123").unwrap();

    fleet(dir.path())
        .args(["new", "--no-open"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("lock"));
}
