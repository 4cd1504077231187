//! booking-core: Core library for the hardware booking tools
//!
//! - **Wizard** - [`WizardSession`] and [`WizardHandle`] drive a multi-step
//!   flow; [`Steps`] composes and registers the step list; [`StepHost`]
//!   keeps only the active step mounted
//! - **Catalog** - [`Catalog`] of bookable [`HardwareItem`]s with EUR
//!   price formatting
//! - **Notes** - [`NoteStore`] trait and [`SqliteNoteStore`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ set_steps ┌─────────────────┐ watch ┌──────────────┐
//! │    Steps     │──────────▶│  WizardSession  │──────▶│  renderers   │
//! │ (flow TOML)  │           │ (WizardState +  │       │ (StepHost)   │
//! └──────────────┘           │   reducer)      │       └──────────────┘
//!                            └─────────────────┘
//!                                    ▲ next / previous / go_to
//!                              WizardHandle
//! ```

pub mod catalog;
pub mod error;
pub mod notes;
pub mod wizard;

pub use catalog::{Catalog, CatalogError, HardwareItem, format_eur};
pub use error::BookingError;
pub use notes::{NewNote, Note, NoteError, NoteStore, SqliteNoteStore};
pub use wizard::{
    ChildSpec, FlowDefinition, Step, StepBody, StepDescriptor, StepHost, StepId, Steps,
    WizardCommand, WizardError, WizardHandle, WizardSession, WizardSnapshot, WizardState,
};
