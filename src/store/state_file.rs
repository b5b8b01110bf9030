//! A single-line state file: one value, or absent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub(crate) struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// First line without its terminator. Missing, unreadable or empty ⇒ `None`.
    pub(crate) fn read(&self) -> Option<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!(path = %self.path.display(), error = %e, "state file unreadable");
                }
                return None;
            }
        };

        let value = content.lines().next().unwrap_or("").trim_end_matches('\r');
        (!value.trim().is_empty()).then(|| value.to_string())
    }

    pub(crate) fn write(&self, value: &str) -> io::Result<()> {
        fs::write(&self.path, format!("{value}\n"))
    }

    /// Remove the file; an already absent file is fine.
    pub(crate) fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
