//! Exclusive check-in lock, persisted in `state/checkedin`.
//!
//! This is the only concurrency-control primitive of the store, and it only
//! serializes check-ins: it does not protect log files against a second
//! process writing at the same time.

use super::state_file::StateFile;
use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectId;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CheckinLock {
    file: StateFile,
}

impl CheckinLock {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: StateFile::new(path),
        }
    }

    /// Current holder, `None` when unlocked.
    pub fn read(&self) -> Option<String> {
        self.file.read()
    }

    pub fn is_held_by(&self, id: &ProjectId) -> bool {
        self.read().as_deref() == Some(id.as_str())
    }

    /// Take the lock for `id`. Re-acquiring a lock already held by `id`
    /// succeeds; a lock held by anybody else is left untouched.
    pub fn acquire(&self, id: &ProjectId) -> AppResult<()> {
        if let Some(holder) = self.read()
            && holder != id.as_str()
        {
            return Err(AppError::LockHeldByOther(holder));
        }

        self.file.write(id.as_str())?;
        debug!(project = %id, "check-in lock acquired");
        Ok(())
    }

    pub fn release(&self) -> AppResult<()> {
        self.file.clear()?;
        debug!(path = %self.file.path().display(), "check-in lock released");
        Ok(())
    }
}
