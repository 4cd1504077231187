//! Terminal booking wizard.
//!
//! Walks the user through choosing hardware, a duration and a note, then
//! posts the booking to a running booking server. Built on ratatui and
//! crossterm; navigation is driven by a `booking_core` wizard session.

mod app;
mod client;
mod form;
mod keybindings;
mod steps;
mod terminal;
mod theme;
mod widgets;

pub use app::{App, Status, bundled_flow};
pub use client::NotesClient;
pub use form::{BookingForm, MAX_HOURS, ValidationError};
pub use keybindings::{Action, KeyBindings};
pub use steps::{
    BookingStep, DurationStep, HardwareStep, NoteField, NoteStep, RenderContext, StepContext,
    SummaryStep,
};
pub use terminal::{BookingTerminal, install_panic_hook, restore_terminal, setup_terminal};
pub use theme::{Theme, booking_default};
pub use widgets::ProgressWidget;
