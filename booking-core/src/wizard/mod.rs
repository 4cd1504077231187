//! Multi-step wizard controller
//!
//! A [`WizardSession`] owns the navigation state of one wizard run and
//! hands out [`WizardHandle`]s. Every mutation goes through
//! [`WizardState::reduce`], a pure function over [`WizardCommand`].
//!
//! ```
//! use booking_core::wizard::{ChildSpec, Steps, WizardSession};
//!
//! let session = WizardSession::new();
//! let handle = session.handle();
//!
//! let children = [
//!     ChildSpec::step("hardware", "Choose hardware"),
//!     ChildSpec::step("summary", "Summary"),
//! ];
//! let steps = Steps::compose(&children, |_| Ok(())).unwrap();
//! steps.sync(&handle).unwrap();
//!
//! handle.on_next().unwrap();
//! assert!(handle.is_last_step().unwrap());
//! ```

mod error;
mod host;
mod session;
mod state;
mod steps;

pub use error::{CallbackError, WizardError};
pub use host::{StepBody, StepHost};
pub use session::{WizardHandle, WizardSession, WizardSnapshot};
pub use state::{StepDescriptor, StepId, WizardCommand, WizardState};
pub use steps::{ChildSpec, FlowDefinition, STEP_KIND, Step, Steps};
