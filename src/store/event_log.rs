//! Per-project append-only event logs: `data/<id>.log`.
//!
//! One event per line, `<timestamp>\t<kind>\t<payload>\n`. Log order is
//! chronological order; nothing sorts on read.

use super::layout::log_file_in;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::project::ProjectId;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct EventLog {
    dir: PathBuf,
}

impl EventLog {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self, id: &ProjectId) -> PathBuf {
        log_file_in(&self.dir, id)
    }

    pub fn exists(&self, id: &ProjectId) -> bool {
        self.path(id).is_file()
    }

    /// Append one event, creating the log if absent. The whole line goes out
    /// in a single write.
    pub fn append(&self, id: &ProjectId, event: &Event) -> AppResult<()> {
        let path = self.path(id);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(event.to_log_line().as_bytes())?;

        debug!(project = %id, kind = %event.kind, stamp = %event.stamp, "event appended");
        Ok(())
    }

    /// Every well-formed event in log order. Malformed lines are skipped,
    /// a missing log reads as empty.
    pub fn read_all(&self, id: &ProjectId) -> AppResult<Vec<Event>> {
        let raw = match fs::read(self.path(id)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let events = raw
            .split(|b| *b == b'\n')
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .filter_map(|(n, line)| {
                let parsed = std::str::from_utf8(line).ok().and_then(Event::from_log_line);
                if parsed.is_none() {
                    debug!(project = %id, line = n + 1, "skipping malformed log line");
                }
                parsed
            })
            .collect();

        Ok(events)
    }

    /// Drop the first `comment` line whose timestamp text and payload both
    /// match exactly. Every other line is copied verbatim to a temporary file
    /// which then replaces the log by rename.
    ///
    /// Returns whether a line was removed. An unreadable log is a no-op.
    pub fn delete_event(&self, id: &ProjectId, stamp: &str, payload: &str) -> AppResult<bool> {
        let path = self.path(id);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(project = %id, error = %e, "cannot open log, nothing deleted");
                return Ok(false);
            }
        };

        let mut removed = false;
        let mut kept = Vec::with_capacity(raw.len());
        for line in raw.split_inclusive(|b| *b == b'\n') {
            if !removed && is_comment_line(line, stamp, payload) {
                removed = true;
                continue;
            }
            kept.extend_from_slice(line);
        }

        if !removed {
            debug!(project = %id, stamp, "no matching comment, log untouched");
            return Ok(false);
        }

        replace_atomically(&path, id, &kept)?;
        debug!(project = %id, stamp, "comment deleted");
        Ok(true)
    }
}

fn is_comment_line(line: &[u8], stamp: &str, payload: &str) -> bool {
    let Ok(text) = std::str::from_utf8(line) else {
        return false;
    };
    let fields: Vec<&str> = text.trim_end_matches(['\n', '\r']).split('\t').collect();

    matches!(
        fields.as_slice(),
        [ts, kind, msg]
            if *kind == EventKind::Comment.to_log_str() && *ts == stamp && *msg == payload
    )
}

fn replace_atomically(path: &Path, id: &ProjectId, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{}.", id.as_str()))
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;

    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
