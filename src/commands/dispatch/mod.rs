//! Command dispatch logic for fleet

use std::env;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use fleet_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

/// Vault root: --root, else the current directory
fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

pub fn run(cli: &Cli, start: Instant, interrupted: Arc<AtomicBool>) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(root = %root.display(), elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start, interrupted)?;

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::New(args) => commands::create::execute(ctx, args),
            Commands::List(args) => commands::list::execute(ctx, args),
            Commands::Clean(args) => commands::clean::execute(ctx, args),
            Commands::Menu => commands::menu::execute(ctx),
            Commands::Config(subcmd) => commands::config::execute(ctx, &subcmd.command),
        }
    }
}
