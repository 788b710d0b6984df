use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::{Duration, SystemTime};

/// Get a Command for fleet bound to `vault`, isolated from the user's
/// configuration and editor settings
pub fn fleet(vault: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("fleet");
    cmd.env("FLEET_CONFIG_DIR", vault.join(".fleet-config"))
        .env_remove("FLEET_ROOT")
        .env_remove("FLEET_LOG")
        .env_remove("RUST_LOG")
        .env_remove("VISUAL")
        .env_remove("EDITOR")
        .arg("--root")
        .arg(vault);
    cmd
}

/// Write a note into the default fleeting directory
pub fn write_note(vault: &Path, name: &str, content: &str) -> PathBuf {
    let dir = vault.join("fleeting");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Push a file's modification time `days` into the past
pub fn age(path: &Path, days: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::now() - Duration::from_secs(days * 24 * 60 * 60))
        .unwrap();
}

/// Parse stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}

/// Sorted file names in the fleeting directory, hidden entries excluded
#[allow(dead_code)]
pub fn remaining(vault: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(vault.join("fleeting"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| !n.starts_with('.'))
        .collect();
    names.sort();
    names
}
