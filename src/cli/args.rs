use clap::{Args, Subcommand};

/// Arguments for the new command.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Do not open the note in an editor after creating it
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for the list command.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Choose a note with the interactive picker and open it
    #[arg(long, short = 'i', visible_alias = "interactive")]
    pub pick: bool,
}

/// Arguments for the clean command.
#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Delete without asking for confirmation
    #[arg(long, short)]
    pub yes: bool,

    /// Show what would be deleted and exit
    #[arg(long, conflicts_with = "yes")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ConfigSubcommand {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective settings
    Show,

    /// Print the location of the configuration file
    Path,

    /// Change one setting and save it
    Set {
        /// Setting name: path, len, maxDays or editor
        key: String,

        /// New value (an empty editor value clears the override)
        value: String,
    },
}
