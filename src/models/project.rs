use super::{event::Event, event_kind::EventKind};
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Timestamp used when a log carries no status-changing event.
pub const EPOCH_SENTINEL: &str = "0000-00-00T00:00:00";

/// A filesystem-safe project identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Accept anything that is a valid file name: non-empty, no `/`,
    /// no NUL and no control characters. Surrounding whitespace is refused
    /// so an id survives the round trip through the state files.
    pub fn parse(s: &str) -> AppResult<Self> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(AppError::InvalidId(s.to_string()))
        }
    }

    pub fn is_valid(s: &str) -> bool {
        !s.is_empty() && s.trim() == s && !s.chars().any(|c| c == '/' || c.is_control())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// List-view filter over derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Finished,
    Canceled,
    Created,
}

impl StatusFilter {
    pub fn matches(&self, status: EventKind) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Finished => status == EventKind::Finish,
            StatusFilter::Canceled => status == EventKind::Cancel,
            StatusFilter::Created => status == EventKind::Created,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Finished => "finished",
            StatusFilter::Canceled => "canceled",
            StatusFilter::Created => "created",
        }
    }
}

/// One row of the project index.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub status: EventKind,
    pub last_timestamp: String,
    pub last_comment: String,
}

impl ProjectSummary {
    /// Fold a log into its summary. Empty logs stay `Created` at the sentinel.
    pub fn from_events(id: ProjectId, events: &[Event]) -> Self {
        let mut summary = Self {
            id,
            status: EventKind::Created,
            last_timestamp: EPOCH_SENTINEL.to_string(),
            last_comment: String::new(),
        };

        for ev in events {
            if ev.kind.is_status_change() {
                summary.status = ev.kind;
                summary.last_timestamp = ev.stamp.clone();
            } else {
                summary.last_comment = ev.payload.clone();
            }
        }

        summary
    }
}

/// Everything the data view shows for one open project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: ProjectId,
    pub status: EventKind,
    pub total_minutes: i64,
    pub comments: Vec<Event>,
    /// Index into `comments`; starts on the most recent one.
    pub cursor: Option<usize>,
}

impl ProjectView {
    pub fn current_comment(&self) -> Option<&Event> {
        self.cursor.and_then(|i| self.comments.get(i))
    }
}

/// Who holds the lock and what is open, for a status-bar style line.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StoreStatus {
    pub checked_in: Option<String>,
    pub active: Option<ProjectId>,
}
