//! Internal operation journal, `state/journal`.
//! One tab-separated line per successful mutation: date, operation, target, message.

use crate::errors::AppResult;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write an internal log line.
    pub fn ttlog(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let line = format!(
            "{}\t{}\t{}\t{}\n",
            now,
            operation,
            sanitize(target),
            sanitize(message)
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Same as `ttlog`, but a failing journal never fails the operation.
    pub fn record(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.ttlog(operation, target, message) {
            warn!(operation, target, error = %e, "failed to write internal journal");
        }
    }

    pub fn entries(&self) -> AppResult<Vec<JournalEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .filter_map(|line| {
                let mut f = line.splitn(4, '\t');
                Some(JournalEntry {
                    date: f.next()?.to_string(),
                    operation: f.next()?.to_string(),
                    target: f.next()?.to_string(),
                    message: f.next().unwrap_or("").to_string(),
                })
            })
            .collect())
    }
}

fn sanitize(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}
