//! Helper functions shared across commands

use std::path::Path;

use fleet_core::error::Result;
use serde::Serialize;

/// Show `path` relative to the vault root when it lies inside it
pub fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Pretty-print a JSON document on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
