//! Storage boundary for fleet
//!
//! The lifecycle engine only talks to storage through [`NoteStore`].
//! [`FsStore`] is the filesystem implementation used by the CLI.

mod filesystem;
mod lock;

use std::path::Path;

use crate::error::Result;
use crate::note::{NoteEntry, NoteMetadata, StoreItem};

pub use filesystem::FsStore;
pub use lock::{DirLock, LOCK_FILE};

/// Operations the lifecycle engine needs from storage
pub trait NoteStore {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Create a new note at `path`, failing if it already exists
    fn create(&self, path: &Path, content: &str) -> Result<NoteEntry>;

    /// Delete a note, or a container together with everything inside it
    fn delete(&self, item: &StoreItem) -> Result<()>;

    /// Direct children of `dir`: every sub-directory, plus the files that
    /// are not hidden
    fn list_children(&self, dir: &Path) -> Result<Vec<StoreItem>>;

    /// Tags and headings for a note, or `None` when unavailable
    fn read_metadata(&self, entry: &NoteEntry) -> Result<Option<NoteMetadata>>;

    /// Take the directory-level lock for a mutating operation
    fn lock(&self, dir: &Path) -> Result<DirLock>;
}
