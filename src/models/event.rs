use super::event_kind::EventKind;
use chrono::{DateTime, Local, NaiveDateTime, SubsecRound, TimeZone, Utc};
use serde::Serialize;

/// Canonical on-disk form, always written in UTC.
pub const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// Older logs were written in naive local time.
pub const LEGACY_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One recorded fact of a project's log.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub timestamp: DateTime<Utc>, // ⇔ parsed instant
    pub stamp: String,            // ⇔ timestamp text exactly as stored in the log
    pub kind: EventKind,          // ⇔ created|checkin|checkout|finish|cancel|comment
    pub payload: String,          // ⇔ comment text, empty for every other kind
}

impl Event {
    /// Event stamped with the current time (whole seconds, UTC).
    pub fn new(kind: EventKind, payload: impl Into<String>) -> Self {
        Self::at(Utc::now(), kind, payload)
    }

    pub fn at(timestamp: DateTime<Utc>, kind: EventKind, payload: impl Into<String>) -> Self {
        let timestamp = timestamp.trunc_subsecs(0);
        Self {
            stamp: format_timestamp(&timestamp),
            timestamp,
            kind,
            payload: payload.into(),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == EventKind::Comment
    }

    /// Serialize as one log line, newline included.
    pub fn to_log_line(&self) -> String {
        format!(
            "{}\t{}\t{}\n",
            self.stamp,
            self.kind.to_log_str(),
            self.payload
        )
    }

    /// Parse one log line. `None` means the line must be skipped.
    pub fn from_log_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\n', '\r']);

        let mut fields = line.split('\t');
        let (stamp, kind, payload) = (fields.next()?, fields.next()?, fields.next()?);
        if fields.next().is_some() {
            return None;
        }

        let timestamp = parse_timestamp(stamp)?;
        let kind = EventKind::from_log_str(kind)?;

        Some(Self {
            timestamp,
            stamp: stamp.to_string(),
            kind,
            payload: payload.to_string(),
        })
    }
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(UTC_FORMAT).to_string()
}

/// Accept “…:SSZ” (UTC) and the legacy “…:SS” (host local time).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, UTC_FORMAT) {
        return Some(naive.and_utc());
    }

    let naive = NaiveDateTime::parse_from_str(s, LEGACY_LOCAL_FORMAT).ok()?;
    // a local time skipped by a DST jump has no instant
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
