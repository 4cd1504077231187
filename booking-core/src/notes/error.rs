//! Notes error types

use thiserror::Error;

/// Errors for note persistence
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Note store lock poisoned")]
    LockPoisoned,
}
