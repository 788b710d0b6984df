//! `fleet clean` command - purge fleeting notes
//!
//! Removes, after confirmation:
//! - sub-directories (the fleeting directory stays flat)
//! - notes not modified within `maxDays`
//! - notes tagged `processed`
//! - untagged notes still titled with the default heading

use chrono::Utc;
use fleet_core::error::Result;
use fleet_core::lifecycle::{CleanOutcome, ConfirmationGate, Lifecycle, PurgeCandidate};
use fleet_core::store::FsStore;

use super::dispatch::{trace_command, CommandContext};
use super::helpers::{display_path, print_json};
use super::picker::{is_interactive, AssumeYes, TerminalGate};
use crate::cli::{CleanArgs, OutputFormat};
use fleet_core::bail_usage;

/// Execute the clean command
pub fn execute(ctx: &CommandContext, args: &CleanArgs) -> Result<()> {
    let config = ctx.load_config()?;
    let store = FsStore::new();
    let engine =
        Lifecycle::new(&store, &config, ctx.root).with_interrupt(ctx.interrupted.clone());
    let now = Utc::now();

    if args.dry_run {
        let plan = engine.plan_clean(now)?;
        trace_command!(ctx.cli, ctx.start, "plan_clean");
        return output_plan(ctx, &plan);
    }

    let mut gate: Box<dyn ConfirmationGate> = if args.yes {
        Box::new(AssumeYes)
    } else if is_interactive() {
        Box::new(TerminalGate)
    } else {
        bail_usage!("refusing to delete without confirmation; pass --yes when not on a terminal");
    };

    let outcome = engine.clean(gate.as_mut(), now)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    report(ctx, outcome)
}

/// Print a cleanup outcome; a partial cleanup becomes an error after printing
pub fn report(ctx: &CommandContext, outcome: CleanOutcome) -> Result<()> {
    match outcome {
        CleanOutcome::Nothing => match ctx.cli.format {
            OutputFormat::Json => print_json(&serde_json::json!({ "removed": [], "failed": [] }))?,
            OutputFormat::Human => {
                if !ctx.cli.quiet {
                    println!("Nothing to clean");
                }
            }
        },
        CleanOutcome::Declined { candidates } => match ctx.cli.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "declined": true,
                "candidates": candidates,
            }))?,
            OutputFormat::Human => {
                if !ctx.cli.quiet {
                    println!("Cancelled, nothing deleted");
                }
            }
        },
        CleanOutcome::Done(report) => {
            match ctx.cli.format {
                OutputFormat::Json => {
                    let removed: Vec<String> = report
                        .removed
                        .iter()
                        .map(|p| display_path(ctx.root, p))
                        .collect();
                    let failed: Vec<_> = report
                        .failed
                        .iter()
                        .map(|f| {
                            serde_json::json!({
                                "path": display_path(ctx.root, &f.path),
                                "reason": f.reason,
                            })
                        })
                        .collect();
                    print_json(&serde_json::json!({ "removed": removed, "failed": failed }))?;
                }
                OutputFormat::Human => {
                    if !ctx.cli.quiet {
                        for path in &report.removed {
                            println!("deleted {}", display_path(ctx.root, path));
                        }
                        println!("Deleted {} fleeting notes", report.removed.len());
                    }
                }
            }
            report.into_result()?;
        }
    }
    Ok(())
}

fn output_plan(ctx: &CommandContext, plan: &[PurgeCandidate]) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let candidates: Vec<_> = plan
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "path": display_path(ctx.root, c.item.path()),
                        "reason": c.reason,
                    })
                })
                .collect();
            print_json(&serde_json::json!({ "candidates": candidates }))
        }
        OutputFormat::Human => {
            if plan.is_empty() {
                if !ctx.cli.quiet {
                    println!("Nothing to clean");
                }
                return Ok(());
            }
            for candidate in plan {
                println!(
                    "{:<10} {}",
                    candidate.reason,
                    display_path(ctx.root, candidate.item.path())
                );
            }
            Ok(())
        }
    }
}
