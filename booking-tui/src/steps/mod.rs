//! Step bodies of the booking flow

mod duration;
mod hardware;
mod note;
mod summary;

use booking_core::{Catalog, ChildSpec, Note, StepBody, StepId, WizardError};
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::Theme;
use crate::form::{BookingForm, ValidationError};

pub use duration::DurationStep;
pub use hardware::HardwareStep;
pub use note::{NoteField, NoteStep};
pub use summary::SummaryStep;

/// Mutable view of the wizard data handed to the active body
pub struct StepContext<'a> {
    pub form: &'a mut BookingForm,
    pub catalog: &'a Catalog,
}

/// Read-only data a body renders from
pub struct RenderContext<'a> {
    pub form: &'a BookingForm,
    pub catalog: &'a Catalog,
    pub theme: &'a Theme,
    /// Set once the summary has been submitted
    pub submitted: Option<&'a Note>,
}

/// One body per known step id
#[derive(Debug)]
pub enum BookingStep {
    Hardware(HardwareStep),
    Duration(DurationStep),
    Note(NoteStep),
    Summary(SummaryStep),
}

impl BookingStep {
    /// Ids a flow file may use
    pub const KNOWN_IDS: [&'static str; 4] = ["hardware", "duration", "note", "summary"];

    /// Body for a flow child, by id
    pub fn for_child(child: &ChildSpec) -> Result<Self, WizardError> {
        let StepId::Text(id) = &child.id else {
            return Err(WizardError::UnknownStep(child.id.clone()));
        };
        match id.as_str() {
            "hardware" => Ok(Self::Hardware(HardwareStep::default())),
            "duration" => Ok(Self::Duration(DurationStep::default())),
            "note" => Ok(Self::Note(NoteStep::default())),
            "summary" => Ok(Self::Summary(SummaryStep::default())),
            _ => Err(WizardError::UnknownStep(child.id.clone())),
        }
    }

    pub fn is_mounted(&self) -> bool {
        match self {
            Self::Hardware(step) => step.mounted,
            Self::Duration(step) => step.mounted,
            Self::Note(step) => step.mounted,
            Self::Summary(step) => step.mounted,
        }
    }

    /// Whether this body submits the booking when advanced
    pub fn submits(&self) -> bool {
        matches!(self, Self::Summary(_))
    }

    /// Check the form fields this step is responsible for
    pub fn validate(&self, form: &BookingForm, catalog: &Catalog) -> Result<(), ValidationError> {
        match self {
            Self::Hardware(_) => form.validate_hardware(catalog),
            Self::Duration(_) => form.validate_hours(),
            Self::Note(_) => form.validate_note(),
            Self::Summary(_) => Ok(()),
        }
    }

    /// Offer a key to the body; returns true if it was consumed
    pub fn handle_key(&mut self, key: KeyEvent, ctx: StepContext<'_>) -> bool {
        match self {
            Self::Hardware(step) => step.handle_key(key, ctx),
            Self::Duration(step) => step.handle_key(key, ctx),
            Self::Note(step) => step.handle_key(key, ctx),
            Self::Summary(_) => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
        match self {
            Self::Hardware(step) => step.render(frame, area, ctx),
            Self::Duration(step) => step.render(frame, area, ctx),
            Self::Note(step) => step.render(frame, area, ctx),
            Self::Summary(step) => step.render(frame, area, ctx),
        }
    }
}

impl StepBody for BookingStep {
    fn mount(&mut self) {
        match self {
            Self::Hardware(step) => step.mounted = true,
            Self::Duration(step) => step.mounted = true,
            Self::Note(step) => step.mount(),
            Self::Summary(step) => step.mounted = true,
        }
    }

    fn unmount(&mut self) {
        match self {
            Self::Hardware(step) => step.mounted = false,
            Self::Duration(step) => step.mounted = false,
            Self::Note(step) => step.mounted = false,
            Self::Summary(step) => step.mounted = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_build_bodies() {
        for id in BookingStep::KNOWN_IDS {
            let body = BookingStep::for_child(&ChildSpec::step(id, id)).unwrap();
            assert!(!body.is_mounted());
        }
    }

    #[test]
    fn unknown_id_rejected() {
        let err = BookingStep::for_child(&ChildSpec::step("payment", "Zahlung")).unwrap_err();
        assert!(matches!(err, WizardError::UnknownStep(StepId::Text(ref id)) if id == "payment"));

        let err = BookingStep::for_child(&ChildSpec::step(3_i64, "drei")).unwrap_err();
        assert!(matches!(err, WizardError::UnknownStep(StepId::Number(3))));
    }

    #[test]
    fn mount_and_unmount_toggle_flag() {
        let mut body = BookingStep::for_child(&ChildSpec::step("note", "Notiz")).unwrap();
        body.mount();
        assert!(body.is_mounted());
        body.unmount();
        assert!(!body.is_mounted());
    }

    #[test]
    fn only_summary_submits() {
        for id in BookingStep::KNOWN_IDS {
            let body = BookingStep::for_child(&ChildSpec::step(id, id)).unwrap();
            assert_eq!(body.submits(), id == "summary");
        }
    }
}
