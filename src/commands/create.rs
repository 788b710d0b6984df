//! `fleet new` command - create a new fleeting note
//!
//! - allocates an unused identifier in the fleeting directory
//! - writes the default `# Fleeting` body
//! - opens the note in the editor unless `--no-open`, JSON output, or no terminal

use fleet_core::id::RandomSource;
use fleet_core::lifecycle::{Editor, Lifecycle};
use fleet_core::store::FsStore;

use super::dispatch::{trace_command, CommandContext};
use super::editor::{ExternalEditor, NoEditor};
use super::helpers::{display_path, print_json};
use super::picker::is_interactive;
use crate::cli::{NewArgs, OutputFormat};
use fleet_core::error::Result;

/// Execute the new command
pub fn execute(ctx: &CommandContext, args: &NewArgs) -> Result<()> {
    let config = ctx.load_config()?;
    trace_command!(ctx.cli, ctx.start, "load_config");

    let store = FsStore::new();
    let engine = Lifecycle::new(&store, &config, ctx.root);

    let open = !args.no_open && ctx.cli.format == OutputFormat::Human && is_interactive();
    let mut editor: Box<dyn Editor> = if open {
        Box::new(ExternalEditor::new(config.editor.as_deref()))
    } else {
        Box::new(NoEditor)
    };

    let entry = engine.create(&mut RandomSource, editor.as_mut())?;
    trace_command!(ctx.cli, ctx.start, "execute_command");

    match ctx.cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "id": entry.stem(),
            "name": entry.name,
            "path": entry.path,
            "modified": entry.modified,
        }))?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{}", display_path(ctx.root, &entry.path));
            }
        }
    }

    Ok(())
}
