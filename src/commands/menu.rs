//! `fleet menu` command - one picker for notes and actions
//!
//! "New fleeting note" and "Clean fleeting notes" are listed first, followed
//! by the active notes. Choosing an action runs it; choosing a note opens it.

use chrono::Utc;
use fleet_core::error::Result;
use fleet_core::id::RandomSource;
use fleet_core::lifecycle::{BrowseOutcome, CommandEntry, Lifecycle};
use fleet_core::store::FsStore;

use super::clean;
use super::dispatch::{trace_command, CommandContext};
use super::editor::ExternalEditor;
use super::helpers::display_path;
use super::picker::{require_interactive, FuzzyPicker, TerminalGate};

/// Execute the menu command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    require_interactive("menu")?;

    let config = ctx.load_config()?;
    let store = FsStore::new();
    let engine =
        Lifecycle::new(&store, &config, ctx.root).with_interrupt(ctx.interrupted.clone());

    let outcome = engine.browse(
        CommandEntry::menu(),
        &mut FuzzyPicker::new("Fleeting notes"),
        &mut ExternalEditor::new(config.editor.as_deref()),
        &mut RandomSource,
        &mut TerminalGate,
        Utc::now(),
    )?;
    trace_command!(ctx.cli, ctx.start, "execute_command");

    match outcome {
        BrowseOutcome::Cancelled => Ok(()),
        BrowseOutcome::Opened(entry) | BrowseOutcome::Created(entry) => {
            if !ctx.cli.quiet {
                println!("{}", display_path(ctx.root, &entry.path));
            }
            Ok(())
        }
        BrowseOutcome::Cleaned(outcome) => clean::report(ctx, outcome),
    }
}
