//! Shared application state for the booking server

use std::sync::Arc;

use booking_core::{Catalog, NoteStore, SqliteNoteStore};
use chrono::{DateTime, Utc};

use crate::ServerError;

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence for the notes endpoint
    pub notes: Arc<dyn NoteStore>,
    /// Hardware shown on the listing page
    pub catalog: Arc<Catalog>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state around the given components
    pub fn new(notes: Arc<dyn NoteStore>, catalog: Catalog) -> Self {
        Self {
            notes,
            catalog: Arc::new(catalog),
            started_at: Utc::now(),
        }
    }

    /// In-memory notes and the bundled catalog (for testing)
    pub fn new_for_testing() -> Result<Self, ServerError> {
        let notes = Arc::new(SqliteNoteStore::open_in_memory()?);
        Ok(Self::new(notes, Catalog::builtin()?))
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_for_testing() {
        let state = AppState::new_for_testing().unwrap();
        assert!(state.uptime_seconds() >= 0);
        assert!(!state.catalog.is_empty());
        assert_eq!(state.notes.count().unwrap(), 0);
    }
}
