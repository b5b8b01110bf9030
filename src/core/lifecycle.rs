use crate::core::calculator::compute_total_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::project::{ProjectId, ProjectSummary, ProjectView};
use crate::store::Store;
use std::fs;
use tracing::info;

/// High-level business logic for project lifecycle commands.
pub struct LifecycleLogic;

impl LifecycleLogic {
    /// Start a fresh log with a `created` event and open it.
    pub fn create(store: &Store, raw_id: &str) -> AppResult<ProjectId> {
        // ------------------------------------------------
        // No new project while another one is running
        // ------------------------------------------------
        if let Some(holder) = store.lock.read() {
            return Err(AppError::LockHeldByOther(holder));
        }

        let id = ProjectId::parse(raw_id.trim())?;

        // ------------------------------------------------
        // Ids stay unique across active and archived logs
        // ------------------------------------------------
        if store.log.exists(&id) || store.layout.archived_log_file(&id).exists() {
            return Err(AppError::AlreadyExists(id.to_string()));
        }

        store.log.append(&id, &Event::new(EventKind::Created, ""))?;
        store.pointer.set(&id)?;

        info!(project = %id, "project created");
        store.journal.record("create", id.as_str(), "Project created");
        Ok(id)
    }

    pub fn check_in(store: &Store, id: &ProjectId) -> AppResult<()> {
        require_exists(store, id)?;

        store.lock.acquire(id)?;
        store.log.append(id, &Event::new(EventKind::CheckIn, ""))?;

        info!(project = %id, "checked in");
        store.journal.record("checkin", id.as_str(), "Checked in");
        Ok(())
    }

    pub fn check_out(store: &Store, id: &ProjectId) -> AppResult<()> {
        Self::close_session(store, id, EventKind::CheckOut)
    }

    pub fn finish(store: &Store, id: &ProjectId) -> AppResult<()> {
        Self::close_session(store, id, EventKind::Finish)
    }

    pub fn cancel(store: &Store, id: &ProjectId) -> AppResult<()> {
        Self::close_session(store, id, EventKind::Cancel)
    }

    /// Dispatch one of the five lifecycle kinds on an existing project.
    pub fn apply(store: &Store, id: &ProjectId, kind: EventKind) -> AppResult<()> {
        match kind {
            EventKind::CheckIn => Self::check_in(store, id),
            k if k.releases_lock() => Self::close_session(store, id, k),
            other => Err(AppError::Other(format!(
                "'{}' is not a lifecycle action",
                other
            ))),
        }
    }

    /// checkout / finish / cancel: only the lock holder may end its session.
    fn close_session(store: &Store, id: &ProjectId, kind: EventKind) -> AppResult<()> {
        require_exists(store, id)?;

        if !store.lock.is_held_by(id) {
            return Err(AppError::NotCheckedIn(id.to_string()));
        }

        // event first: a failed append leaves the lock where it was
        store.log.append(id, &Event::new(kind, ""))?;
        store.lock.release()?;

        info!(project = %id, kind = %kind, "session closed");
        store
            .journal
            .record(kind.to_log_str(), id.as_str(), "Session closed");
        Ok(())
    }

    /// Move the log to `archived/`, keeping its history.
    pub fn archive(store: &Store, id: &ProjectId) -> AppResult<()> {
        require_exists(store, id)?;

        let target = store.layout.archived_log_file(id);
        if target.exists() {
            return Err(AppError::AlreadyExists(format!("archived/{}", id)));
        }

        fs::create_dir_all(&store.layout.archive_dir)?;
        fs::rename(store.log.path(id), &target)?;
        forget(store, id)?;

        info!(project = %id, "project archived");
        store.journal.record(
            "archive",
            id.as_str(),
            &format!("Moved to {}", target.display()),
        );
        Ok(())
    }

    pub fn delete(store: &Store, id: &ProjectId) -> AppResult<()> {
        require_exists(store, id)?;

        fs::remove_file(store.log.path(id))?;
        forget(store, id)?;

        info!(project = %id, "project deleted");
        store
            .journal
            .record("delete", id.as_str(), "Project deleted permanently");
        Ok(())
    }

    /// Load the data view of a project and make it the open one.
    pub fn open(store: &Store, id: &ProjectId) -> AppResult<ProjectView> {
        require_exists(store, id)?;

        let events = store.log.read_all(id)?;
        let summary = ProjectSummary::from_events(id.clone(), &events);
        let total_minutes = compute_total_minutes(&events);
        let comments: Vec<Event> = events.into_iter().filter(Event::is_comment).collect();

        store.pointer.set(id)?;

        Ok(ProjectView {
            id: id.clone(),
            status: summary.status,
            total_minutes,
            cursor: comments.len().checked_sub(1),
            comments,
        })
    }

    /// Back to the project list: nothing is open any more.
    pub fn close(store: &Store) -> AppResult<()> {
        store.pointer.clear()
    }
}

fn require_exists(store: &Store, id: &ProjectId) -> AppResult<()> {
    if store.log.exists(id) {
        Ok(())
    } else {
        Err(AppError::NotFound(id.to_string()))
    }
}

/// Drop every reference the state files hold to a project that left `data/`.
fn forget(store: &Store, id: &ProjectId) -> AppResult<()> {
    if store.lock.is_held_by(id) {
        store.lock.release()?;
    }
    if store.pointer.is(id) {
        store.pointer.clear()?;
    }
    Ok(())
}
