//! Fleeting note lifecycle: create, list, browse and clean
//!
//! The engine borrows a [`NoteStore`] and a [`Config`] for the duration of a
//! single operation and holds nothing between calls. User interaction goes
//! through the [`Editor`], [`Presenter`] and [`ConfirmationGate`] traits so
//! the CLI can plug in terminal prompts and tests can script them.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{FailedRemoval, FleetError, Result};
use crate::id::{allocate_unique, CandidateSource};
use crate::note::{default_body, NoteEntry, StoreItem};
use crate::policy::{is_active, purge_reason, PurgeReason};
use crate::store::NoteStore;
use crate::trace_time;

/// Opens a note for editing
pub trait Editor {
    fn open(&mut self, entry: &NoteEntry) -> Result<()>;
}

/// Shows a searchable list and returns the index of the chosen item.
///
/// `Ok(None)` means the user closed the picker without choosing.
pub trait Presenter {
    fn pick(&mut self, items: &[PickItem]) -> Result<Option<usize>>;
}

/// Blocking yes/no question before destructive work
pub trait ConfirmationGate {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// An action offered alongside notes in the combined menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    Clean,
}

/// Synthetic pick-list entry that runs an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub label: String,
    pub action: MenuAction,
}

impl CommandEntry {
    pub fn new(label: impl Into<String>, action: MenuAction) -> Self {
        CommandEntry {
            label: label.into(),
            action,
        }
    }

    /// The commands offered by the combined menu
    pub fn menu() -> Vec<CommandEntry> {
        vec![
            CommandEntry::new("New fleeting note", MenuAction::Create),
            CommandEntry::new("Clean fleeting notes", MenuAction::Clean),
        ]
    }
}

/// An active note as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedNote {
    pub title: String,
    #[serde(flatten)]
    pub entry: NoteEntry,
}

impl ListedNote {
    fn new(entry: NoteEntry) -> Self {
        ListedNote {
            title: entry.title().to_string(),
            entry,
        }
    }
}

/// One row of the picker
#[derive(Debug, Clone, PartialEq)]
pub enum PickItem {
    Command(CommandEntry),
    Note(ListedNote),
}

impl PickItem {
    pub fn label(&self) -> String {
        match self {
            PickItem::Command(cmd) => format!("> {}", cmd.label),
            PickItem::Note(note) if note.title == note.entry.name => note.title.clone(),
            PickItem::Note(note) => format!("{} ({})", note.title, note.entry.name),
        }
    }
}

/// An item selected for removal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurgeCandidate {
    pub reason: PurgeReason,
    pub item: StoreItem,
}

/// Result of a confirmed cleanup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<FailedRemoval>,
}

impl CleanReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turn a partial cleanup into an error naming what was left behind
    pub fn into_result(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(FleetError::CleanIncomplete {
                failed: self.failed,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Nothing qualified; no prompt was shown
    Nothing,
    /// The user declined; nothing was deleted
    Declined { candidates: usize },
    Done(CleanReport),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseOutcome {
    Cancelled,
    Opened(NoteEntry),
    Created(NoteEntry),
    Cleaned(CleanOutcome),
}

/// Prompt shown before deleting `count` items
pub fn confirmation_message(count: usize) -> String {
    format!("Do you wish to delete {} fleeting notes?", count)
}

/// Ascending by modification time; name breaks ties
fn by_modified(a: &ListedNote, b: &ListedNote) -> Ordering {
    a.entry
        .modified
        .cmp(&b.entry.modified)
        .then_with(|| a.entry.name.cmp(&b.entry.name))
}

pub struct Lifecycle<'a, S: NoteStore + ?Sized> {
    store: &'a S,
    config: &'a Config,
    dir: PathBuf,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<'a, S: NoteStore + ?Sized> Lifecycle<'a, S> {
    /// Bind the engine to a store, a configuration and the vault root
    pub fn new(store: &'a S, config: &'a Config, root: &Path) -> Self {
        Lifecycle {
            store,
            config,
            dir: config.notes_dir(root),
            interrupted: None,
        }
    }

    /// Stop cleanup between deletions once `flag` is set (Ctrl-C)
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted
            .as_ref()
            .is_some_and(|flag| flag.load(AtomicOrdering::SeqCst))
    }

    /// The managed directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create a uniquely named note holding the default body and open it.
    ///
    /// The directory lock covers allocation and the write only; it is
    /// released before the editor starts. Once the note exists, an editor
    /// failure is logged and the entry is still returned.
    #[tracing::instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn create<C, E>(&self, ids: &mut C, editor: &mut E) -> Result<NoteEntry>
    where
        C: CandidateSource + ?Sized,
        E: Editor + ?Sized,
    {
        let start = Instant::now();
        let entry = {
            let _lock = self.store.lock(&self.dir)?;
            let id = allocate_unique(ids, self.config.len, |candidate| {
                self.store.exists(&self.dir.join(candidate.file_name()))
            })?;
            self.store
                .create(&self.dir.join(id.file_name()), &default_body())?
        };
        info!(path = %entry.path.display(), "created fleeting note");
        trace_time!(start, "create_note");

        if let Err(e) = editor.open(&entry) {
            warn!(path = %entry.path.display(), error = %e, "editor failed; note was kept");
        }
        Ok(entry)
    }

    /// Active notes, oldest first
    #[tracing::instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn list(&self) -> Result<Vec<ListedNote>> {
        let start = Instant::now();
        let items = self.store.list_children(&self.dir)?;

        let mut notes = Vec::new();
        for item in items {
            let StoreItem::Note(mut entry) = item else {
                continue;
            };
            entry.metadata = self.store.read_metadata(&entry)?;
            if is_active(&entry) {
                notes.push(ListedNote::new(entry));
            }
        }
        notes.sort_by(by_modified);

        trace_time!(start, "list_notes", count = notes.len());
        Ok(notes)
    }

    /// Present `commands` followed by the active notes and act on the choice
    pub fn browse<P, E, C, G>(
        &self,
        commands: Vec<CommandEntry>,
        presenter: &mut P,
        editor: &mut E,
        ids: &mut C,
        gate: &mut G,
        now: DateTime<Utc>,
    ) -> Result<BrowseOutcome>
    where
        P: Presenter + ?Sized,
        E: Editor + ?Sized,
        C: CandidateSource + ?Sized,
        G: ConfirmationGate + ?Sized,
    {
        let mut items: Vec<PickItem> = commands.into_iter().map(PickItem::Command).collect();
        items.extend(self.list()?.into_iter().map(PickItem::Note));

        let Some(index) = presenter.pick(&items)? else {
            debug!("picker_cancelled");
            return Ok(BrowseOutcome::Cancelled);
        };
        let chosen = items.into_iter().nth(index).ok_or_else(|| {
            FleetError::Other(format!("picker returned out-of-range index {}", index))
        })?;

        match chosen {
            PickItem::Note(note) => {
                editor.open(&note.entry)?;
                Ok(BrowseOutcome::Opened(note.entry))
            }
            PickItem::Command(cmd) => match cmd.action {
                MenuAction::Create => Ok(BrowseOutcome::Created(self.create(ids, editor)?)),
                MenuAction::Clean => Ok(BrowseOutcome::Cleaned(self.clean(gate, now)?)),
            },
        }
    }

    /// Everything cleanup would remove, in listing order
    #[tracing::instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn plan_clean(&self, now: DateTime<Utc>) -> Result<Vec<PurgeCandidate>> {
        let start = Instant::now();
        let items = self.store.list_children(&self.dir)?;

        let mut candidates = Vec::new();
        for mut item in items {
            if let StoreItem::Note(entry) = &mut item {
                entry.metadata = self.store.read_metadata(entry)?;
            }
            if let Some(reason) = purge_reason(&item, self.config, now) {
                debug!(path = %item.path().display(), %reason, "purge_candidate");
                candidates.push(PurgeCandidate { reason, item });
            }
        }
        candidates.sort_by(|a, b| a.item.name().cmp(b.item.name()));

        trace_time!(start, "plan_clean", count = candidates.len());
        Ok(candidates)
    }

    /// Remove stale and processed notes after confirmation.
    ///
    /// Each deletion is attempted independently; failures are collected in
    /// the report rather than stopping the rest. After an interrupt the
    /// remaining candidates are reported as failed and left in place.
    pub fn clean<G>(&self, gate: &mut G, now: DateTime<Utc>) -> Result<CleanOutcome>
    where
        G: ConfirmationGate + ?Sized,
    {
        if !self.store.exists(&self.dir)? {
            return Err(FleetError::DirectoryNotFound {
                path: self.dir.clone(),
            });
        }
        let _lock = self.store.lock(&self.dir)?;

        let candidates = self.plan_clean(now)?;
        if candidates.is_empty() {
            debug!("nothing_to_clean");
            return Ok(CleanOutcome::Nothing);
        }

        if !gate.confirm(&confirmation_message(candidates.len()))? {
            debug!(candidates = candidates.len(), "clean_declined");
            return Ok(CleanOutcome::Declined {
                candidates: candidates.len(),
            });
        }

        let mut report = CleanReport::default();
        for candidate in candidates {
            let path = candidate.item.path().to_path_buf();
            if self.is_interrupted() {
                report.failed.push(FailedRemoval {
                    path,
                    reason: "interrupted".to_string(),
                });
                continue;
            }
            match self.store.delete(&candidate.item) {
                Ok(()) => {
                    info!(path = %path.display(), reason = %candidate.reason, "deleted");
                    report.removed.push(path);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "delete failed");
                    report.failed.push(FailedRemoval {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
        Ok(CleanOutcome::Done(report))
    }
}
