#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use statlog::models::event::Event;
use statlog::models::event_kind::EventKind;
use statlog::models::project::ProjectId;
use statlog::store::Store;
use std::fs;
use tempfile::TempDir;

pub fn statlog() -> Command {
    cargo_bin_cmd!("statlog")
}

/// `statlog --test --base <dir> ...`
pub fn statlog_in(base: &TempDir) -> Command {
    let mut cmd = statlog();
    cmd.args(["--test", "--base"]).arg(base.path());
    cmd
}

/// Fresh base directory with its store opened.
pub fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = Store::open(dir.path()).expect("open store");
    (dir, store)
}

pub fn pid(s: &str) -> ProjectId {
    ProjectId::parse(s).expect("valid id")
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Append a dated event straight to a log.
pub fn append_at(
    store: &Store,
    id: &ProjectId,
    ts: DateTime<Utc>,
    kind: EventKind,
    payload: &str,
) -> Event {
    let ev = Event::at(ts, kind, payload);
    store.log.append(id, &ev).expect("append");
    ev
}

/// Overwrite a project's log with raw text.
pub fn write_raw_log(store: &Store, id: &ProjectId, content: &str) {
    fs::write(store.log.path(id), content).expect("write raw log");
}

pub fn read_raw_log(store: &Store, id: &ProjectId) -> String {
    fs::read_to_string(store.log.path(id)).expect("read raw log")
}
