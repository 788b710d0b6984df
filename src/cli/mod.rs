//! CLI argument parsing for fleet
//!
//! Uses clap derive. Global flags: --root, --config, --format, --quiet,
//! --verbose, --log-level, --log-json

pub mod args;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{CleanArgs, ConfigCommands, ConfigSubcommand, ListArgs, NewArgs};
pub use output::OutputFormat;

/// Fleet - create, browse and purge fleeting notes
#[derive(Parser, Debug)]
#[command(name = "fleet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault root the fleeting note directory is resolved against
    #[arg(long, global = true, env = "FLEET_ROOT")]
    pub root: Option<PathBuf>,

    /// Configuration file (default: $FLEET_CONFIG_DIR/config.toml or the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `fleet_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level fleet commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new fleeting note
    #[command(visible_alias = "create")]
    New(NewArgs),

    /// List fleeting notes not yet marked processed, oldest first
    List(ListArgs),

    /// Delete stale, processed and untouched fleeting notes
    Clean(CleanArgs),

    /// Pick a note or an action (new, clean) from one menu
    Menu,

    /// Show or edit settings
    Config(ConfigSubcommand),
}
