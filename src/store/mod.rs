//! File-backed state of one base directory.
//!
//! Nothing is cached: every call goes back to disk, the files *are* the state.

pub mod event_log;
pub mod journal;
pub mod layout;
pub mod lock;
pub mod pointer;
mod state_file;

use crate::errors::AppResult;
use crate::models::project::StoreStatus;
use event_log::EventLog;
use journal::Journal;
use layout::Layout;
use lock::CheckinLock;
use pointer::ActiveProjectPointer;
use std::path::PathBuf;

/// Handle scoped to a base directory; pass it to every core operation.
#[derive(Debug, Clone)]
pub struct Store {
    pub layout: Layout,
    pub log: EventLog,
    pub lock: CheckinLock,
    pub pointer: ActiveProjectPointer,
    pub journal: Journal,
}

impl Store {
    /// Open (and create if needed) the directory tree under `base`.
    pub fn open(base: impl Into<PathBuf>) -> AppResult<Self> {
        let layout = Layout::new(base);
        layout.ensure_dirs()?;

        Ok(Self {
            log: EventLog::new(layout.data_dir.clone()),
            lock: CheckinLock::new(layout.lock_file()),
            pointer: ActiveProjectPointer::new(layout.running_file(), layout.data_dir.clone()),
            journal: Journal::new(layout.journal_file()),
            layout,
        })
    }

    /// Lock holder and open project, for a status-bar style display.
    pub fn status(&self) -> AppResult<StoreStatus> {
        Ok(StoreStatus {
            checked_in: self.lock.read(),
            active: self.pointer.read()?,
        })
    }
}
