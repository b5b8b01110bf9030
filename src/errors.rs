//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid project id: {0:?}")]
    InvalidId(String),

    #[error("Invalid comment: {0}")]
    InvalidComment(String),

    // ---------------------------
    // Lock / state errors
    // ---------------------------
    #[error("Already checked-in to '{0}'. Check-out first.")]
    LockHeldByOther(String),

    #[error("Not checked-in to project '{0}'.")]
    NotCheckedIn(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Project already exists: {0}")]
    AlreadyExists(String),

    #[error("No active project (use `open <ID>` or pass an id)")]
    NoActiveProject,

    #[error("Comment #{0} does not exist")]
    InvalidCommentIndex(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
