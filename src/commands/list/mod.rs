//! `fleet list` command - list fleeting notes still in progress
//!
//! - notes tagged `processed` are hidden
//! - sub-directories are never listed
//! - oldest first (by modification time)
//! - `--pick` opens the fuzzy picker and then the chosen note

mod format;

use chrono::Utc;
use fleet_core::error::Result;
use fleet_core::id::RandomSource;
use fleet_core::lifecycle::{BrowseOutcome, Lifecycle};
use fleet_core::store::FsStore;

use self::format::{output_human, output_json};
use super::dispatch::{trace_command, CommandContext};
use super::editor::ExternalEditor;
use super::helpers::display_path;
use super::picker::{require_interactive, FuzzyPicker, TerminalGate};
use crate::cli::{ListArgs, OutputFormat};

/// Execute the list command
pub fn execute(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let store = FsStore::new();
    let engine = Lifecycle::new(&store, &config, ctx.root);

    if args.pick {
        require_interactive("list --pick")?;
        let outcome = engine.browse(
            Vec::new(),
            &mut FuzzyPicker::new("Fleeting notes"),
            &mut ExternalEditor::new(config.editor.as_deref()),
            &mut RandomSource,
            &mut TerminalGate,
            Utc::now(),
        )?;
        trace_command!(ctx.cli, ctx.start, "execute_command");

        if let BrowseOutcome::Opened(entry) = outcome {
            if !ctx.cli.quiet {
                println!("{}", display_path(ctx.root, &entry.path));
            }
        }
        return Ok(());
    }

    let notes = engine.list()?;
    trace_command!(ctx.cli, ctx.start, "execute_command");

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx, &notes),
        OutputFormat::Json => output_json(ctx, &notes)?,
    }
    Ok(())
}
