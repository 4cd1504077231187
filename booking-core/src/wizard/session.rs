//! Wizard session ownership and the handles step renderers navigate through

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, trace};

use super::error::{CallbackError, WizardError};
use super::state::{StepDescriptor, StepId, WizardCommand, WizardState};

#[derive(Debug)]
struct Shared {
    state: watch::Sender<WizardState>,
    advancing: AtomicBool,
}

/// Owns the state of one wizard run.
///
/// The session is the single writer; every [`WizardHandle`] it hands out
/// dispatches commands into it and any number of subscribers observe the
/// result. Dropping the session ends it, after which all handles fail with
/// [`WizardError::OutsideSession`].
#[derive(Debug)]
pub struct WizardSession {
    shared: Arc<Shared>,
}

impl WizardSession {
    pub fn new() -> Self {
        let (state, _) = watch::channel(WizardState::new());
        Self {
            shared: Arc::new(Shared {
                state,
                advancing: AtomicBool::new(false),
            }),
        }
    }

    /// Get a handle to pass to step renderers
    pub fn handle(&self) -> WizardHandle {
        WizardHandle {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Current state (cloned)
    pub fn state(&self) -> WizardState {
        self.shared.state.borrow().clone()
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a renderer reads from the controller, captured at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot {
    pub active_step_index: usize,
    pub steps: Vec<StepDescriptor>,
    pub is_first_step: bool,
    pub is_last_step: bool,
}

impl From<&WizardState> for WizardSnapshot {
    fn from(state: &WizardState) -> Self {
        Self {
            active_step_index: state.active_step_index,
            steps: state.steps.clone(),
            is_first_step: state.is_first_step(),
            is_last_step: state.is_last_step(),
        }
    }
}

/// Access point to a running wizard session.
#[derive(Debug, Clone)]
pub struct WizardHandle {
    shared: Weak<Shared>,
}

impl WizardHandle {
    fn shared(&self) -> Result<Arc<Shared>, WizardError> {
        self.shared.upgrade().ok_or(WizardError::OutsideSession)
    }

    fn read<T>(&self, f: impl FnOnce(&WizardState) -> T) -> Result<T, WizardError> {
        let shared = self.shared()?;
        let state = shared.state.borrow();
        Ok(f(&state))
    }

    /// Whether the owning session is still alive
    pub fn is_active(&self) -> bool {
        self.shared.strong_count() > 0
    }

    pub fn active_step_index(&self) -> Result<usize, WizardError> {
        self.read(|s| s.active_step_index)
    }

    pub fn steps(&self) -> Result<Vec<StepDescriptor>, WizardError> {
        self.read(|s| s.steps.clone())
    }

    pub fn step_count(&self) -> Result<usize, WizardError> {
        self.read(|s| s.steps.len())
    }

    pub fn is_first_step(&self) -> Result<bool, WizardError> {
        self.read(WizardState::is_first_step)
    }

    pub fn is_last_step(&self) -> Result<bool, WizardError> {
        self.read(WizardState::is_last_step)
    }

    pub fn snapshot(&self) -> Result<WizardSnapshot, WizardError> {
        self.read(|s| WizardSnapshot::from(s))
    }

    /// The active step's descriptor, or `None` while no steps are registered.
    pub fn active_step(&self) -> Result<Option<StepDescriptor>, WizardError> {
        self.read(|s| s.active_step().cloned())
    }

    /// Observe every state change
    pub fn subscribe(&self) -> Result<watch::Receiver<WizardState>, WizardError> {
        Ok(self.shared()?.state.subscribe())
    }

    /// Run a command through the reducer. Returns whether the state changed.
    pub fn dispatch(&self, command: WizardCommand) -> Result<bool, WizardError> {
        let shared = self.shared()?;
        let label = command_label(&command);
        let changed = shared.state.send_if_modified(|state| state.apply(command));

        let index = shared.state.borrow().active_step_index;
        if changed {
            debug!(command = label, active_step_index = index, "wizard transition");
        } else {
            trace!(command = label, active_step_index = index, "wizard command ignored");
        }
        Ok(changed)
    }

    /// Jump to a zero-based step index.
    ///
    /// The argument is a position, not a step id; see [`go_to_id`](Self::go_to_id).
    pub fn go_to(&self, index: usize) -> Result<bool, WizardError> {
        self.dispatch(WizardCommand::GoTo(index))
    }

    /// Jump to the first step carrying `id`. Unknown ids are ignored.
    pub fn go_to_id(&self, id: &StepId) -> Result<bool, WizardError> {
        match self.read(|s| s.index_of(id))? {
            Some(index) => self.go_to(index),
            None => {
                trace!(%id, "go_to_id: no such step");
                Ok(false)
            }
        }
    }

    pub fn on_previous(&self) -> Result<bool, WizardError> {
        self.dispatch(WizardCommand::Previous)
    }

    /// Advance without a callback.
    pub fn on_next(&self) -> Result<bool, WizardError> {
        let _guard = self.begin_advance()?;
        self.dispatch(WizardCommand::Next)
    }

    /// Run `callback` to completion, then advance.
    ///
    /// If the callback fails the index stays where it was and the error is
    /// returned as [`WizardError::Callback`]. Only one forward navigation may
    /// be in flight per session; a second call made while a callback is still
    /// running fails with [`WizardError::NavigationInFlight`].
    pub async fn on_next_with<F, Fut, E>(&self, callback: F) -> Result<bool, WizardError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<CallbackError>,
    {
        let _guard = self.begin_advance()?;
        if let Err(e) = callback().await {
            let err = e.into();
            debug!(error = %err, "step callback failed, staying on current step");
            return Err(WizardError::Callback(err));
        }
        self.dispatch(WizardCommand::Next)
    }

    /// Replace the registered step list. The active index is not touched.
    pub fn set_steps(&self, steps: Vec<StepDescriptor>) -> Result<bool, WizardError> {
        self.dispatch(WizardCommand::SetSteps(steps))
    }

    fn begin_advance(&self) -> Result<AdvanceGuard, WizardError> {
        let shared = self.shared()?;
        if shared
            .advancing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WizardError::NavigationInFlight);
        }
        Ok(AdvanceGuard {
            shared: Arc::downgrade(&shared),
        })
    }
}

/// Clears the in-flight flag however the advance ends.
struct AdvanceGuard {
    shared: Weak<Shared>,
}

impl Drop for AdvanceGuard {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.advancing.store(false, Ordering::Release);
        }
    }
}

fn command_label(command: &WizardCommand) -> &'static str {
    match command {
        WizardCommand::Next => "next",
        WizardCommand::Previous => "previous",
        WizardCommand::GoTo(_) => "go_to",
        WizardCommand::SetSteps(_) => "set_steps",
    }
}
