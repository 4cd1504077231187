//! Data collected across the wizard steps

use booking_core::{Catalog, HardwareItem, NewNote, format_eur};
use thiserror::Error;

/// Bookings are limited to a single day.
pub const MAX_HOURS: u32 = 24;

/// Reasons a step refuses to advance
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Bitte wählen Sie eine Hardware aus.")]
    NoHardware,

    #[error("Die Hardware `{0}` ist nicht mehr verfügbar.")]
    UnknownHardware(String),

    #[error("Die Dauer muss zwischen 1 und 24 Stunden liegen.")]
    HoursOutOfRange,

    #[error("Bitte geben Sie einen Titel für die Notiz ein.")]
    EmptyTitle,
}

/// What the user has entered so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    /// Id of the chosen catalog item
    pub hardware: Option<String>,
    pub hours: u32,
    pub title: String,
    pub content: String,
}

impl BookingForm {
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a HardwareItem> {
        self.hardware.as_deref().and_then(|id| catalog.get(id))
    }

    pub fn validate_hardware(&self, catalog: &Catalog) -> Result<(), ValidationError> {
        let id = self.hardware.as_ref().ok_or(ValidationError::NoHardware)?;
        match catalog.get(id) {
            Some(item) if item.show => Ok(()),
            _ => Err(ValidationError::UnknownHardware(id.clone())),
        }
    }

    pub fn validate_hours(&self) -> Result<(), ValidationError> {
        if (1..=MAX_HOURS).contains(&self.hours) {
            Ok(())
        } else {
            Err(ValidationError::HoursOutOfRange)
        }
    }

    pub fn validate_note(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            Err(ValidationError::EmptyTitle)
        } else {
            Ok(())
        }
    }

    /// Total for the booked hours, when hours are set and the item has a price
    pub fn total_cost(&self, catalog: &Catalog) -> Option<f64> {
        if self.hours == 0 {
            return None;
        }
        self.selected(catalog)
            .and_then(|item| item.cost_for(self.hours))
    }

    /// Booking summary lines shown on the last step and sent with the note
    pub fn summary_lines(&self, catalog: &Catalog) -> Vec<String> {
        let hardware = self
            .selected(catalog)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| "-".to_string());

        let mut lines = vec![format!("Hardware: {hardware}")];
        if self.hours > 0 {
            lines.push(format!("Dauer: {} Stunden", self.hours));
        }
        if let Some(total) = self.total_cost(catalog) {
            lines.push(format!("Kosten: {}", format_eur(total)));
        }
        lines
    }

    /// The note submitted on the last step
    pub fn to_note(&self, catalog: &Catalog) -> NewNote {
        let mut content = self.summary_lines(catalog).join("\n");
        if !self.content.trim().is_empty() {
            content.push_str("\n\n");
            content.push_str(&self.content);
        }
        NewNote::new(self.title.trim(), content)
    }
}
