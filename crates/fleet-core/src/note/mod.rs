//! Note model for fleet
//!
//! A managed directory holds notes (single files) and, occasionally, stray
//! sub-directories. Both are represented by [`StoreItem`].

pub mod parse;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title written into every new note; an untouched note still carries it
pub const DEFAULT_TITLE: &str = "Fleeting";

/// Tag marking a note as triaged
pub const PROCESSED_TAG: &str = "processed";

/// Body of a freshly created note
pub fn default_body() -> String {
    format!("# {}\n", DEFAULT_TITLE)
}

/// A markdown heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Heading {
            level,
            text: text.into(),
        }
    }
}

/// Tags and headings extracted from a note.
///
/// `None` means the document has no tag (or no heading) at all, which the
/// eligibility rules treat differently from an empty match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    pub tags: Option<Vec<String>>,
    pub headings: Option<Vec<Heading>>,
}

impl NoteMetadata {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    /// First level-1 heading, if any
    pub fn title(&self) -> Option<&str> {
        self.headings
            .as_ref()?
            .iter()
            .find(|h| h.level == 1)
            .map(|h| h.text.as_str())
    }
}

/// A single note file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteEntry {
    pub path: PathBuf,
    pub name: String,
    pub modified: DateTime<Utc>,
    /// `None` when the store could not provide metadata for this file
    pub metadata: Option<NoteMetadata>,
}

impl NoteEntry {
    /// File stem, which for notes created by fleet is the identifier
    pub fn stem(&self) -> &str {
        Path::new(&self.name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.name)
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.metadata.as_ref()?.tags.as_deref()
    }

    /// Display title: first level-1 heading, falling back to the file name
    pub fn title(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(NoteMetadata::title)
            .unwrap_or(&self.name)
    }
}

/// A sub-directory inside the managed directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Anything found directly under the managed directory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreItem {
    Note(NoteEntry),
    Container(ContainerEntry),
}

impl StoreItem {
    pub fn path(&self) -> &Path {
        match self {
            StoreItem::Note(note) => &note.path,
            StoreItem::Container(dir) => &dir.path,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StoreItem::Note(note) => &note.name,
            StoreItem::Container(dir) => &dir.name,
        }
    }

    pub fn as_note(&self) -> Option<&NoteEntry> {
        match self {
            StoreItem::Note(note) => Some(note),
            StoreItem::Container(_) => None,
        }
    }
}
