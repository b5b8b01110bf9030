use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::LifecycleLogic;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::ui::messages::success;

use super::{open_store, resolve_project};

/// `in`, `out`, `finish` and `cancel`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, kind) = match cmd {
        Commands::In { id } => (id, EventKind::CheckIn),
        Commands::Out { id } => (id, EventKind::CheckOut),
        Commands::Finish { id } => (id, EventKind::Finish),
        Commands::Cancel { id } => (id, EventKind::Cancel),
        _ => return Ok(()),
    };

    let store = open_store(cfg)?;
    let id = resolve_project(&store, id)?;

    LifecycleLogic::apply(&store, &id, kind)?;

    let msg = match kind {
        EventKind::CheckIn => format!("Checked-in to '{}'.", id),
        EventKind::CheckOut => format!("Checked-out of '{}'.", id),
        EventKind::Finish => format!("Project '{}' finished.", id),
        _ => format!("Project '{}' canceled.", id),
    };
    success(msg);
    Ok(())
}
