use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_kind::EventKind;
use crate::models::project::ProjectId;
use crate::store::Store;
use tracing::info;

/// Comment events: only the checked-in project may add or delete them.
pub struct CommentLogic;

impl CommentLogic {
    /// Append a comment. Blank text is a silent no-op (`Ok(None)`).
    pub fn add(store: &Store, id: &ProjectId, text: &str) -> AppResult<Option<Event>> {
        require_checked_in(store, id)?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        // the payload is the last field of a tab-separated line
        if text.contains(['\t', '\n', '\r']) {
            return Err(AppError::InvalidComment(
                "comments cannot contain tabs or line breaks".into(),
            ));
        }

        let event = Event::new(EventKind::Comment, text);
        store.log.append(id, &event)?;

        info!(project = %id, "comment added");
        store.journal.record("comment", id.as_str(), text);
        Ok(Some(event))
    }

    /// All comments, oldest first.
    pub fn list(store: &Store, id: &ProjectId) -> AppResult<Vec<Event>> {
        if !store.log.exists(id) {
            return Err(AppError::NotFound(id.to_string()));
        }

        Ok(store
            .log
            .read_all(id)?
            .into_iter()
            .filter(Event::is_comment)
            .collect())
    }

    /// Delete exactly the chosen comment (same timestamp text and payload).
    pub fn delete(store: &Store, id: &ProjectId, chosen: &Event) -> AppResult<bool> {
        require_checked_in(store, id)?;

        let removed = store.log.delete_event(id, &chosen.stamp, &chosen.payload)?;
        if removed {
            info!(project = %id, stamp = %chosen.stamp, "comment deleted");
            store.journal.record(
                "uncomment",
                id.as_str(),
                &format!("{} {}", chosen.stamp, chosen.payload),
            );
        }
        Ok(removed)
    }
}

fn require_checked_in(store: &Store, id: &ProjectId) -> AppResult<()> {
    if store.lock.is_held_by(id) {
        Ok(())
    } else {
        Err(AppError::NotCheckedIn(id.to_string()))
    }
}
