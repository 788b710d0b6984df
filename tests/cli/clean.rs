use crate::support::{age, fleet, remaining, stdout_json, write_note};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// ============================================================================
// Clean command tests
// ============================================================================

/// One item per purge rule plus two survivors
fn seed(vault: &Path) {
    let old = write_note(vault, "old.md", "# Important\n\n#keep\n");
    age(&old, 40);
    write_note(vault, "done.md", "# Done\n\n#processed\n");
    write_note(vault, "blank.md", "# Fleeting\n");
    write_note(vault, "keep.md", "# Real idea\n");
    write_note(vault, "tagged.md", "# Fleeting\n\n#idea\n");
    let stray = vault.join("fleeting/stray");
    fs::create_dir_all(&stray).unwrap();
    fs::write(stray.join("inner.md"), "# Inner\n").unwrap();
}

#[test]
fn test_clean_yes_removes_eligible_items() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    fleet(dir.path())
        .args(["clean", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 4 fleeting notes"));

    assert_eq!(remaining(dir.path()), vec!["keep.md", "tagged.md"]);
    assert!(!dir.path().join("fleeting/.fleet.lock").exists());
}

#[test]
fn test_clean_twice_is_a_no_op() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    fleet(dir.path()).args(["clean", "--yes"]).assert().success();
    fleet(dir.path())
        .args(["clean", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));
}

#[test]
fn test_clean_json_report() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = fleet(dir.path())
        .args(["--format", "json", "clean", "--yes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["removed"].as_array().unwrap().len(), 4);
    assert!(json["failed"].as_array().unwrap().is_empty());
}

#[test]
fn test_clean_dry_run_deletes_nothing() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    fleet(dir.path())
        .args(["clean", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("container"))
        .stdout(predicate::str::contains("expired"))
        .stdout(predicate::str::contains("processed"))
        .stdout(predicate::str::contains("untouched"))
        .stdout(predicate::str::contains("keep.md").not());

    assert_eq!(remaining(dir.path()).len(), 6);
}

#[test]
fn test_clean_dry_run_json() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    let output = fleet(dir.path())
        .args(["--format", "json", "clean", "--dry-run"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let reasons: Vec<&str> = json["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["reason"].as_str().unwrap())
        .collect();
    // Sorted by name: blank, done, old, stray
    assert_eq!(reasons, vec!["untouched", "processed", "expired", "container"]);
}

#[test]
fn test_clean_without_terminal_requires_yes() {
    let dir = tempdir().unwrap();
    seed(dir.path());

    fleet(dir.path())
        .arg("clean")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));

    assert_eq!(remaining(dir.path()).len(), 6);
}

#[test]
fn test_clean_yes_conflicts_with_dry_run() {
    let dir = tempdir().unwrap();
    fleet(dir.path())
        .args(["clean", "--yes", "--dry-run"])
        .assert()
        .code(2);
}

#[test]
fn test_clean_missing_directory_exit_code_3() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["clean", "--yes"])
        .assert()
        .code(3);
    assert!(!dir.path().join("fleeting").exists());
}

#[test]
fn test_clean_refuses_while_locked() {
    let dir = tempdir().unwrap();
    seed(dir.path());
    fs::write(dir.path().join("fleeting/.fleet.lock"), "123").unwrap();

    fleet(dir.path())
        .args(["clean", "--yes"])
        .assert()
        .code(3);

    assert_eq!(remaining(dir.path()).len(), 6);
    assert!(dir.path().join("fleeting/.fleet.lock").exists());
}

#[test]
fn test_clean_honours_max_days() {
    let dir = tempdir().unwrap();
    let note = write_note(dir.path(), "week.md", "# Week old\n");
    age(&note, 7);

    fleet(dir.path()).args(["clean", "--yes"]).assert().success();
    assert_eq!(remaining(dir.path()), vec!["week.md"]);

    fleet(dir.path())
        .args(["config", "set", "maxDays", "5"])
        .assert()
        .success();
    fleet(dir.path()).args(["clean", "--yes"]).assert().success();
    assert!(remaining(dir.path()).is_empty());
}

#[test]
fn test_clean_removes_hidden_sub_directories() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "keep.md", "# Real idea\n");
    let hidden = dir.path().join("fleeting/.old");
    fs::create_dir_all(&hidden).unwrap();
    fs::write(hidden.join("x.md"), "# x\n").unwrap();

    fleet(dir.path())
        .args(["clean", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 fleeting notes"));

    assert!(!hidden.exists());
    assert_eq!(remaining(dir.path()), vec!["keep.md"]);
}
