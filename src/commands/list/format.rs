use fleet_core::error::Result;
use fleet_core::lifecycle::ListedNote;

use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{display_path, print_json};

/// One line per note: modification time, path, title
pub fn output_human(ctx: &CommandContext, notes: &[ListedNote]) {
    if notes.is_empty() {
        if !ctx.cli.quiet {
            println!("No fleeting notes");
        }
        return;
    }

    for note in notes {
        println!(
            "{}  {}  {}",
            note.entry.modified.format("%Y-%m-%d %H:%M"),
            display_path(ctx.root, &note.entry.path),
            note.title
        );
    }
}

pub fn output_json(ctx: &CommandContext, notes: &[ListedNote]) -> Result<()> {
    let output: Vec<_> = notes
        .iter()
        .map(|note| {
            serde_json::json!({
                "id": note.entry.stem(),
                "name": note.entry.name,
                "path": display_path(ctx.root, &note.entry.path),
                "title": note.title,
                "modified": note.entry.modified,
                "tags": note.entry.tags().unwrap_or_default(),
            })
        })
        .collect();
    print_json(&output)
}
