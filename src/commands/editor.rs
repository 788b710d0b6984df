//! Launch the user's editor on a note

use std::process::Command;

use fleet_core::error::{FleetError, Result};
use fleet_core::lifecycle::Editor;
use fleet_core::note::NoteEntry;

/// Runs `editor` (config override, $VISUAL, $EDITOR, then `vi`) and waits
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(editor_override: Option<&str>) -> Self {
        let command = editor_override
            .map(String::from)
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "vi".to_string());
        Self { command }
    }
}

impl Editor for ExternalEditor {
    fn open(&mut self, entry: &NoteEntry) -> Result<()> {
        // Allow editors configured with flags, e.g. `code --wait`
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| FleetError::invalid_value("editor", &self.command))?;

        tracing::debug!(editor = %self.command, path = %entry.path.display(), "open_editor");
        let status = Command::new(program)
            .args(parts)
            .arg(&entry.path)
            .status()
            .map_err(|e| FleetError::storage("launch editor", program, e))?;

        if !status.success() {
            return Err(FleetError::Other(format!(
                "editor `{}` exited with {}",
                self.command, status
            )));
        }
        Ok(())
    }
}

/// Editor that leaves the note closed (`new --no-open`, JSON output)
pub struct NoEditor;

impl Editor for NoEditor {
    fn open(&mut self, _entry: &NoteEntry) -> Result<()> {
        Ok(())
    }
}
