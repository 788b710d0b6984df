//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use fleet_core::config::Config;
use fleet_core::error::Result;

/// Resolve the configuration file: --config, else the default location
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Config::default_path(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub config_path: PathBuf,
    pub start: Instant,
    /// Set by the Ctrl-C handler
    pub interrupted: Arc<AtomicBool>,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        root: &'a Path,
        start: Instant,
        interrupted: Arc<AtomicBool>,
    ) -> Result<Self> {
        Ok(Self {
            cli,
            root,
            config_path: resolve_config_path(cli)?,
            start,
            interrupted,
        })
    }

    /// Load settings merged over defaults
    pub fn load_config(&self) -> Result<Config> {
        Config::load(&self.config_path)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("fleet {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Create, browse and purge fleeting notes.");
        println!();
        println!("Run `fleet --help` for usage information.");
        Ok(())
    }
}
