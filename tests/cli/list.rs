use crate::support::{age, fleet, stdout_json, write_note};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// List command tests
// ============================================================================

#[test]
fn test_list_missing_directory_exit_code_3() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_list_empty_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("fleeting")).unwrap();

    fleet(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No fleeting notes"));
}

#[test]
fn test_list_oldest_first_and_hides_processed() {
    let dir = tempdir().unwrap();
    let alpha = write_note(dir.path(), "alpha.md", "# Alpha\n");
    let beta = write_note(dir.path(), "beta.md", "# Beta\n");
    let done = write_note(
        dir.path(),
        "done.md",
        "---\ntags: [processed]\n---\n# Done\n",
    );
    fs::create_dir_all(dir.path().join("fleeting/stray")).unwrap();
    age(&alpha, 3);
    age(&beta, 1);
    age(&done, 2);

    let output = fleet(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let notes = json.as_array().unwrap();
    let names: Vec<&str> = notes.iter().map(|n| n["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["alpha.md", "beta.md"]);
    assert_eq!(notes[0]["title"], "Alpha");
    assert_eq!(notes[0]["path"], "fleeting/alpha.md");
}

#[test]
fn test_list_human_output() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "a1b2c3.md", "# Caching idea\n");

    fleet(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("fleeting/a1b2c3.md"))
        .stdout(predicate::str::contains("Caching idea"));
}

#[test]
fn test_list_reports_tags() {
    let dir = tempdir().unwrap();
    write_note(
        dir.path(),
        "tagged.md",
        "---\ntags: [idea]\n---\n# Tagged\n\nsee #followup and `#notatag`\n",
    );

    let output = fleet(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json[0]["tags"], serde_json::json!(["idea", "followup"]));
}

#[test]
fn test_list_keeps_non_markdown_files() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "scratch.txt", "#processed\n");

    let output = fleet(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json[0]["name"], "scratch.txt");
    assert_eq!(json[0]["title"], "scratch.txt");
}

#[test]
fn test_list_ignores_lock_file() {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "note.md", "# Note\n");
    fs::write(dir.path().join("fleeting/.fleet.lock"), "1").unwrap();

    let output = fleet(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 1);
}
