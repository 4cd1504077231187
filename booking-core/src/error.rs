//! Error types for booking-core

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::notes::NoteError;
use crate::wizard::WizardError;

/// Top-level error type for booking-core
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Notes error: {0}")]
    Notes(#[from] NoteError),
}
