//! Interactive prompts backed by the inquire crate
//!
//! Provides the fuzzy picker used by `list --pick` and `menu`, and the
//! confirmation prompt used by `clean`.

use std::io::IsTerminal;

use fleet_core::error::{FleetError, Result};
use fleet_core::lifecycle::{ConfirmationGate, PickItem, Presenter};
use inquire::{Confirm, InquireError, Select};

/// Check if stdin is a TTY (interactive terminal)
///
/// Returns false if running in a non-interactive environment (CI, pipe, etc.)
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Fail early with a usage error when no terminal is attached
pub fn require_interactive(what: &str) -> Result<()> {
    if is_interactive() {
        Ok(())
    } else {
        Err(FleetError::UsageError(format!(
            "{} needs an interactive terminal",
            what
        )))
    }
}

fn prompt_error(e: InquireError) -> FleetError {
    FleetError::storage("read answer from", "stdin", e)
}

/// Fuzzy-filtered single choice list
pub struct FuzzyPicker {
    prompt: String,
}

impl FuzzyPicker {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Presenter for FuzzyPicker {
    fn pick(&mut self, items: &[PickItem]) -> Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }

        let options: Vec<String> = items.iter().map(PickItem::label).collect();
        let help_message = format!(
            "{} items, type to filter, ↑↓ to navigate, Enter to select, Esc to cancel",
            items.len()
        );

        let select = Select::new(&self.prompt, options)
            .with_help_message(&help_message)
            .with_page_size(20);

        match select.raw_prompt() {
            Ok(choice) => Ok(Some(choice.index)),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(None)
            }
            Err(e) => Err(prompt_error(e)),
        }
    }
}

/// Yes/no prompt that defaults to "no"
pub struct TerminalGate;

impl ConfirmationGate for TerminalGate {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        match Confirm::new(message).with_default(false).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(false)
            }
            Err(e) => Err(prompt_error(e)),
        }
    }
}

/// Gate for `clean --yes`
pub struct AssumeYes;

impl ConfirmationGate for AssumeYes {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        tracing::debug!(message, "confirmation skipped (--yes)");
        Ok(true)
    }
}
