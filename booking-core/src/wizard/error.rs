//! Wizard error types

use thiserror::Error;

use super::StepId;

/// Boxed error returned by an `on_next` callback
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the wizard controller and step composition
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("wizard handle must be used within an active wizard session")]
    OutsideSession,

    #[error("steps must have at least one child")]
    EmptyComposition,

    #[error("invalid child at position {index}: expected a step, got `{kind}`")]
    InvalidChild { index: usize, kind: String },

    #[error("no step body registered for step `{0}`")]
    UnknownStep(StepId),

    #[error("a forward navigation is already in progress")]
    NavigationInFlight,

    #[error("step callback failed: {0}")]
    Callback(#[source] CallbackError),

    #[error("invalid flow definition: {0}")]
    Flow(#[from] toml::de::Error),
}
