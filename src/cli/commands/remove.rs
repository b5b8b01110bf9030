use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lifecycle::LifecycleLogic;
use crate::errors::AppResult;
use crate::models::project::ProjectId;
use crate::ui::messages::{info, success};

use super::{ask_confirmation, open_store};

/// `archive` and `delete`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (raw, yes, archive) = match cmd {
        Commands::Archive { id, yes } => (id, *yes, true),
        Commands::Delete { id, yes } => (id, *yes, false),
        _ => return Ok(()),
    };

    let store = open_store(cfg)?;
    let id = ProjectId::parse(raw)?;

    let prompt = if archive {
        format!("Archive project '{}'?", id)
    } else {
        format!("DELETE project '{}' forever? This action is irreversible.", id)
    };

    if !yes && cfg.confirm_destructive && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    if archive {
        LifecycleLogic::archive(&store, &id)?;
        success(format!("Project '{}' archived.", id));
    } else {
        LifecycleLogic::delete(&store, &id)?;
        success(format!("Project '{}' deleted.", id));
    }

    Ok(())
}
