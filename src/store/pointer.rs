//! Which project the user currently has open, persisted in `state/running`.
//! Independent of the check-in lock.

use super::layout::log_file_in;
use super::state_file::StateFile;
use crate::errors::AppResult;
use crate::models::project::ProjectId;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ActiveProjectPointer {
    file: StateFile,
    data_dir: PathBuf,
}

impl ActiveProjectPointer {
    pub fn new(path: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            file: StateFile::new(path),
            data_dir,
        }
    }

    /// The open project, if it still exists. A pointer to a project whose
    /// log is gone (or to an invalid id) is forgotten on read.
    pub fn read(&self) -> AppResult<Option<ProjectId>> {
        let Some(raw) = self.file.read() else {
            return Ok(None);
        };

        match ProjectId::parse(&raw) {
            Ok(id) if log_file_in(&self.data_dir, &id).exists() => Ok(Some(id)),
            _ => {
                debug!(project = %raw, "active project vanished, clearing pointer");
                self.clear()?;
                Ok(None)
            }
        }
    }

    pub fn is(&self, id: &ProjectId) -> bool {
        self.file.read().as_deref() == Some(id.as_str())
    }

    pub fn set(&self, id: &ProjectId) -> AppResult<()> {
        self.file.write(id.as_str())?;
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        self.file.clear()?;
        Ok(())
    }
}
