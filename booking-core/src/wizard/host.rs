//! Mounting of the active step body

use tracing::trace;

use super::error::WizardError;
use super::session::WizardHandle;
use super::steps::{Step, Steps};

/// Lifecycle hooks of a step body.
///
/// A body is mounted when its step becomes active and unmounted when it
/// stops being active. Inactive bodies receive no calls at all.
pub trait StepBody {
    fn mount(&mut self) {}

    fn unmount(&mut self) {}
}

/// Keeps exactly one step body mounted: the active one.
#[derive(Debug, Default)]
pub struct StepHost {
    mounted: Option<usize>,
}

impl StepHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently mounted body
    pub fn mounted(&self) -> Option<usize> {
        self.mounted
    }

    /// Bring the mounted body in line with the controller and return it.
    ///
    /// Returns `None` when the active index does not point into `steps`.
    pub fn update<'a, B: StepBody>(
        &mut self,
        steps: &'a mut Steps<B>,
        handle: &WizardHandle,
    ) -> Result<Option<&'a mut Step<B>>, WizardError> {
        let index = handle.active_step_index()?;
        let target = (index < steps.len()).then_some(index);

        if self.mounted != target {
            if let Some(previous) = self.mounted.take()
                && let Some(step) = steps.get_mut(previous)
            {
                trace!(step = %step.id, "unmounting step");
                step.body.unmount();
            }
            if let Some(next) = target
                && let Some(step) = steps.get_mut(next)
            {
                trace!(step = %step.id, "mounting step");
                step.body.mount();
            }
            self.mounted = target;
        }

        Ok(target.and_then(move |i| steps.get_mut(i)))
    }

    /// Unmount whatever is mounted (e.g. when the wizard closes)
    pub fn clear<B: StepBody>(&mut self, steps: &mut Steps<B>) {
        if let Some(previous) = self.mounted.take()
            && let Some(step) = steps.get_mut(previous)
        {
            step.body.unmount();
        }
    }
}
