//! Fleet - fleeting note manager
//!
//! Creates uniquely named scratch notes, lists the ones still in progress,
//! and purges the stale or processed ones from a markdown vault.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use fleet_core::error::FleetError;
use fleet_core::logging;

/// Exit status used when a second Ctrl-C forces termination
const INTERRUPTED_EXIT: i32 = 130;

fn main() -> ExitCode {
    let start = Instant::now();
    let json_requested = argv_requests_json(env::args().skip(1));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if json_requested && !is_informational(err.kind()) => {
            let error = parse_failure(&err);
            eprintln!("{}", error.to_json());
            return exit_status(&error);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let interrupted = install_interrupt_handler();
    match commands::dispatch::run(&cli, start, interrupted) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                OutputFormat::Human if !cli.quiet => eprintln!("error: {}", e),
                OutputFormat::Human => {}
            }
            exit_status(&e)
        }
    }
}

fn exit_status(error: &FleetError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

/// The first Ctrl-C only raises the flag, so cleanup stops between
/// deletions and the directory lock is released on the normal path. A
/// second Ctrl-C terminates immediately.
fn install_interrupt_handler() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&flag);

    let installed = ctrlc::set_handler(move || {
        if handler_flag.swap(true, Ordering::SeqCst) {
            std::process::exit(INTERRUPTED_EXIT);
        }
    });
    if let Err(e) = installed {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
    }
    flag
}

/// clap may fail before `Cli.format` is known, so look for the flag in argv
fn argv_requests_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}

/// Help and version output are not failures
fn is_informational(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn parse_failure(err: &clap::Error) -> FleetError {
    match err.kind() {
        ErrorKind::Io | ErrorKind::Format => FleetError::Other(err.to_string()),
        _ => FleetError::UsageError(err.to_string()),
    }
}
