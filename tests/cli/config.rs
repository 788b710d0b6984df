use crate::support::{fleet, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path = fleeting"))
        .stdout(predicate::str::contains("len = 6"))
        .stdout(predicate::str::contains("maxDays = 30"));
}

#[test]
fn test_config_show_json() {
    let dir = tempdir().unwrap();

    let output = fleet(dir.path())
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["path"], "fleeting");
    assert_eq!(json["len"], 6);
    assert_eq!(json["maxDays"], 30);
}

#[test]
fn test_config_path_honours_env() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".fleet-config"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_set_persists() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "set", "maxDays", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maxDays = 7"));

    let stored = fs::read_to_string(dir.path().join(".fleet-config/config.toml")).unwrap();
    let table: toml::Table = toml::from_str(&stored).unwrap();
    assert_eq!(table["maxDays"].as_integer(), Some(7));
    assert_eq!(table["len"].as_integer(), Some(6));
}

#[test]
fn test_config_set_editor_then_clear() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "set", "editor", "nano"])
        .assert()
        .success()
        .stdout(predicate::str::contains("editor = nano"));
    fleet(dir.path())
        .args(["config", "set", "editor", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("editor =").not());
}

#[test]
fn test_config_set_invalid_value_keeps_file() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "set", "len", "3"])
        .assert()
        .code(2);
    fleet(dir.path())
        .args(["config", "set", "path", "../outside"])
        .assert()
        .code(2);
    assert!(!dir.path().join(".fleet-config/config.toml").exists());
}

#[test]
fn test_config_set_unknown_key() {
    let dir = tempdir().unwrap();

    fleet(dir.path())
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn test_explicit_config_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("custom.toml");
    fs::write(&file, "path = \"scratch\"\n").unwrap();

    let output = fleet(dir.path())
        .arg("--config")
        .arg(&file)
        .args(["--format", "json", "new"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let id = stdout_json(&output)["id"].as_str().unwrap().to_string();
    assert!(dir.path().join("scratch").join(format!("{}.md", id)).exists());
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("broken.toml");
    fs::write(&file, "len = \"six\"\n").unwrap();

    fleet(dir.path())
        .arg("--config")
        .arg(&file)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));

    fleet(dir.path())
        .arg("--config")
        .arg(&file)
        .args(["--format", "json", "config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"toml_error\""));
}
