//! Eligibility rules for listing and cleanup
//!
//! Both predicates are pure: they look only at the item, the configuration
//! and the supplied clock value.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::note::{NoteEntry, StoreItem, DEFAULT_TITLE, PROCESSED_TAG};

/// Why an item was selected for cleanup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PurgeReason {
    /// A sub-directory; the managed directory is kept flat
    Container,
    /// Not modified within `maxDays`
    Expired,
    /// Tagged with the processed marker
    Processed,
    /// Untagged and still titled with the default heading
    Untouched,
}

impl PurgeReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurgeReason::Container => "container",
            PurgeReason::Expired => "expired",
            PurgeReason::Processed => "processed",
            PurgeReason::Untouched => "untouched",
        }
    }
}

impl std::fmt::Display for PurgeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Whether a note should be offered for further editing.
///
/// Only the processed marker excludes a note; missing metadata keeps it.
pub fn is_active(entry: &NoteEntry) -> bool {
    !entry
        .tags()
        .is_some_and(|tags| tags.iter().any(|t| t == PROCESSED_TAG))
}

/// Decide whether an item is removed during cleanup; first matching rule wins.
pub fn purge_reason(item: &StoreItem, config: &Config, now: DateTime<Utc>) -> Option<PurgeReason> {
    let note = match item {
        StoreItem::Container(_) => return Some(PurgeReason::Container),
        StoreItem::Note(note) => note,
    };

    let max_age = Duration::days(i64::from(config.max_days));
    if now.signed_duration_since(note.modified) > max_age {
        return Some(PurgeReason::Expired);
    }

    let metadata = note.metadata.as_ref();
    match metadata.and_then(|m| m.tags.as_ref()) {
        Some(tags) => tags
            .iter()
            .any(|t| t == PROCESSED_TAG)
            .then_some(PurgeReason::Processed),
        None => metadata
            .and_then(|m| m.title())
            .is_some_and(|title| title == DEFAULT_TITLE)
            .then_some(PurgeReason::Untouched),
    }
}

pub fn should_purge(item: &StoreItem, config: &Config, now: DateTime<Utc>) -> bool {
    purge_reason(item, config, now).is_some()
}
