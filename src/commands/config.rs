//! `fleet config` command - show and edit settings
//!
//! Every `set` validates the new value and rewrites the configuration file.

use fleet_core::config::Config;
use fleet_core::error::Result;

use super::dispatch::CommandContext;
use super::helpers::print_json;
use crate::cli::{ConfigCommands, OutputFormat};

/// Execute a config subcommand
pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(ctx, &ctx.load_config()?),
        ConfigCommands::Path => {
            match ctx.cli.format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "path": ctx.config_path,
                    "exists": ctx.config_path.exists(),
                }))?,
                OutputFormat::Human => println!("{}", ctx.config_path.display()),
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = ctx.load_config()?;
            config.set(key, value)?;
            config.save(&ctx.config_path)?;
            tracing::info!(key = %key, value = %value, path = %ctx.config_path.display(), "config_saved");

            if ctx.cli.quiet {
                return Ok(());
            }
            show(ctx, &config)
        }
    }
}

fn show(ctx: &CommandContext, config: &Config) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Human => {
            println!("path = {}", config.path);
            println!("len = {}", config.len);
            println!("maxDays = {}", config.max_days);
            if let Some(editor) = &config.editor {
                println!("editor = {}", editor);
            }
            println!("directory = {}", config.notes_dir(ctx.root).display());
            Ok(())
        }
    }
}
