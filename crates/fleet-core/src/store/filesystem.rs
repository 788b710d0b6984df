//! Filesystem-backed note store

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use super::{DirLock, NoteStore};
use crate::error::{FleetError, Result};
use crate::note::parse::parse_metadata;
use crate::note::{ContainerEntry, NoteEntry, NoteMetadata, StoreItem};

/// Note store over plain directories and markdown files
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        FsStore
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

fn modified_time(path: &Path, meta: &fs::Metadata) -> Result<DateTime<Utc>> {
    let modified = meta
        .modified()
        .map_err(|e| FleetError::storage("read modification time of", path.display(), e))?;
    Ok(DateTime::<Utc>::from(modified))
}

impl NoteStore for FsStore {
    fn exists(&self, path: &Path) -> Result<bool> {
        path.try_exists()
            .map_err(|e| FleetError::storage("check", path.display(), e))
    }

    fn create(&self, path: &Path, content: &str) -> Result<NoteEntry> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| FleetError::storage("create directory", dir.display(), e))?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| FleetError::storage("create", path.display(), e))?;

        let written = file
            .write_all(content.as_bytes())
            .and_then(|()| file.sync_all());
        if let Err(e) = written {
            drop(file);
            // Leave no half-written note behind
            let _ = fs::remove_file(path);
            return Err(FleetError::storage("write", path.display(), e));
        }

        let meta = file
            .metadata()
            .map_err(|e| FleetError::storage("stat", path.display(), e))?;

        Ok(NoteEntry {
            path: path.to_path_buf(),
            name: file_name(path),
            modified: modified_time(path, &meta)?,
            metadata: Some(parse_metadata(content, Some(path))),
        })
    }

    fn delete(&self, item: &StoreItem) -> Result<()> {
        let result = match item {
            StoreItem::Note(note) => fs::remove_file(&note.path),
            StoreItem::Container(dir) => fs::remove_dir_all(&dir.path),
        };
        result.map_err(|e| FleetError::storage("delete", item.path().display(), e))
    }

    fn list_children(&self, dir: &Path) -> Result<Vec<StoreItem>> {
        if !dir.is_dir() {
            return Err(FleetError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut items = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| FleetError::storage("list", dir.display(), e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.path().to_path_buf();

            // Any sub-directory is stray, hidden or not
            if entry.file_type().is_dir() {
                items.push(StoreItem::Container(ContainerEntry { path, name }));
                continue;
            }
            // Hidden files (the lock among them) are never notes
            if name.starts_with('.') {
                continue;
            }

            let meta = entry
                .metadata()
                .map_err(|e| FleetError::storage("stat", path.display(), e))?;
            items.push(StoreItem::Note(NoteEntry {
                modified: modified_time(&path, &meta)?,
                path,
                name,
                metadata: None,
            }));
        }

        tracing::trace!(dir = %dir.display(), count = items.len(), "list_children");
        Ok(items)
    }

    fn read_metadata(&self, entry: &NoteEntry) -> Result<Option<NoteMetadata>> {
        if !is_markdown(&entry.path) {
            return Ok(None);
        }

        match fs::read_to_string(&entry.path) {
            Ok(content) => Ok(Some(parse_metadata(&content, Some(&entry.path)))),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(path = %entry.path.display(), "note is not valid UTF-8, skipping metadata");
                Ok(None)
            }
            Err(e) => Err(FleetError::storage("read", entry.path.display(), e)),
        }
    }

    fn lock(&self, dir: &Path) -> Result<DirLock> {
        fs::create_dir_all(dir)
            .map_err(|e| FleetError::storage("create directory", dir.display(), e))?;
        DirLock::acquire(dir)
    }
}
