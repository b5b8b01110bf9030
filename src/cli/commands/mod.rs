pub mod action;
pub mod comment;
pub mod config;
pub mod init;
pub mod list;
pub mod log;
pub mod project;
pub mod remove;
pub mod status;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::project::ProjectId;
use crate::store::Store;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the store of the configured base directory.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    Store::open(cfg.base_path())
}

/// Explicit id, or the open project when none is given.
pub(crate) fn resolve_project(store: &Store, id: &Option<String>) -> AppResult<ProjectId> {
    match id {
        Some(raw) => ProjectId::parse(raw),
        None => store.pointer.read()?.ok_or(AppError::NoActiveProject),
    }
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
