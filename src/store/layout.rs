//! On-disk layout of a statlog base directory.

use crate::models::project::ProjectId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = "data";
pub const ARCHIVE_DIR: &str = "archived";
pub const STATE_DIR: &str = "state";

pub const LOG_EXT: &str = "log";
pub const RUNNING_FILE: &str = "running";
pub const LOCK_FILE: &str = "checkedin";
pub const JOURNAL_FILE: &str = "journal";

#[derive(Debug, Clone)]
pub struct Layout {
    pub base: PathBuf,
    pub data_dir: PathBuf,
    pub archive_dir: PathBuf,
    pub state_dir: PathBuf,
}

impl Layout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            data_dir: base.join(DATA_DIR),
            archive_dir: base.join(ARCHIVE_DIR),
            state_dir: base.join(STATE_DIR),
            base,
        }
    }

    /// Create `data/`, `archived/` and `state/` if they are missing.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::create_dir_all(&self.archive_dir)?;
        fs::create_dir_all(&self.state_dir)?;
        Ok(())
    }

    pub fn log_file(&self, id: &ProjectId) -> PathBuf {
        log_file_in(&self.data_dir, id)
    }

    pub fn archived_log_file(&self, id: &ProjectId) -> PathBuf {
        log_file_in(&self.archive_dir, id)
    }

    pub fn lock_file(&self) -> PathBuf {
        self.state_dir.join(LOCK_FILE)
    }

    pub fn running_file(&self) -> PathBuf {
        self.state_dir.join(RUNNING_FILE)
    }

    pub fn journal_file(&self) -> PathBuf {
        self.state_dir.join(JOURNAL_FILE)
    }
}

/// `<dir>/<id>.log`
pub fn log_file_in(dir: &Path, id: &ProjectId) -> PathBuf {
    dir.join(format!("{}.{}", id.as_str(), LOG_EXT))
}
