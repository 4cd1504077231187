//! Server error types

use booking_core::{CatalogError, NoteError};
use thiserror::Error;

/// Errors that can occur in the booking server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified address
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Notes database could not be opened
    #[error("storage error: {0}")]
    Storage(#[from] NoteError),

    /// Hardware catalog could not be loaded
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}
