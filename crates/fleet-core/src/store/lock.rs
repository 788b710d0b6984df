use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{FleetError, Result};

/// Lock file placed inside the managed directory while create/clean run
pub const LOCK_FILE: &str = ".fleet.lock";

/// Guard for directory-level mutual exclusion.
///
/// The lock file is removed when the guard is dropped. A lock left behind by
/// a crashed process has to be removed by hand.
#[derive(Debug)]
pub struct DirLock {
    path: Option<PathBuf>,
}

impl DirLock {
    /// Create the lock file in `dir`, failing if another process holds it
    pub fn acquire(dir: &Path) -> Result<Self> {
        let path = dir.join(LOCK_FILE);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(FleetError::Locked { path });
            }
            Err(e) => return Err(FleetError::storage("lock", path.display(), e)),
        };
        // Best effort; the pid only helps when diagnosing a stale lock
        let _ = writeln!(file, "{}", std::process::id());

        tracing::trace!(path = %path.display(), "lock_acquired");
        Ok(DirLock { path: Some(path) })
    }

    /// A guard that holds nothing, for stores without a filesystem
    pub fn noop() -> Self {
        DirLock { path: None }
    }
}

impl Drop for DirLock {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            if let Err(e) = fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "failed to release lock");
            }
        }
    }
}
