//! Step composition: the ordered list of steps a wizard walks through

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::WizardError;
use super::session::WizardHandle;
use super::state::{StepDescriptor, StepId};

/// The only child kind a step list accepts
pub const STEP_KIND: &str = "step";

/// One child of a flow definition, as written in TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSpec {
    pub kind: String,
    pub id: StepId,
    #[serde(default)]
    pub title: Option<String>,
}

impl ChildSpec {
    pub fn step(id: impl Into<StepId>, title: impl Into<String>) -> Self {
        Self {
            kind: STEP_KIND.to_string(),
            id: id.into(),
            title: Some(title.into()),
        }
    }
}

/// A wizard flow as loaded from configuration.
///
/// ```toml
/// title = "Book hardware"
///
/// [[children]]
/// kind = "step"
/// id = "hardware"
/// title = "Choose hardware"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDefinition {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub children: Vec<ChildSpec>,
}

impl FlowDefinition {
    pub fn from_toml(contents: &str) -> Result<Self, WizardError> {
        Ok(toml::from_str(contents)?)
    }
}

/// A composed step: its identity plus the body that renders it.
#[derive(Debug)]
pub struct Step<B> {
    pub id: StepId,
    pub title: String,
    pub body: B,
}

/// Validated, ordered step list.
#[derive(Debug)]
pub struct Steps<B> {
    steps: Vec<Step<B>>,
}

impl<B> Steps<B> {
    /// Build the step list from flow children.
    ///
    /// Fails straight away if there are no children or any child is not a
    /// step; the error names the first offending position.
    pub fn compose<F>(children: &[ChildSpec], mut make_body: F) -> Result<Self, WizardError>
    where
        F: FnMut(&ChildSpec) -> Result<B, WizardError>,
    {
        if children.is_empty() {
            return Err(WizardError::EmptyComposition);
        }

        if let Some((index, child)) = children
            .iter()
            .enumerate()
            .find(|(_, child)| child.kind != STEP_KIND)
        {
            return Err(WizardError::InvalidChild {
                index,
                kind: child.kind.clone(),
            });
        }

        let steps = children
            .iter()
            .map(|child| {
                Ok(Step {
                    id: child.id.clone(),
                    title: child.title.clone().unwrap_or_else(|| child.id.to_string()),
                    body: make_body(child)?,
                })
            })
            .collect::<Result<Vec<_>, WizardError>>()?;

        Ok(Self { steps })
    }

    /// Build from already-constructed steps
    pub fn from_steps(steps: Vec<Step<B>>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptyComposition);
        }
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step<B>> {
        self.steps.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Step<B>> {
        self.steps.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Step<B>> {
        self.steps.get_mut(index)
    }

    /// Descriptors in display order, as registered with the controller
    pub fn descriptors(&self) -> Vec<StepDescriptor> {
        self.steps
            .iter()
            .map(|step| StepDescriptor {
                id: step.id.clone(),
            })
            .collect()
    }

    /// Register this list with the controller if the counts differ.
    ///
    /// Only the count is compared. When registration shrinks the list below
    /// the active index, the controller is moved to the new last step.
    /// Returns whether a registration happened.
    pub fn sync(&self, handle: &WizardHandle) -> Result<bool, WizardError> {
        if handle.step_count()? == self.steps.len() {
            return Ok(false);
        }

        handle.set_steps(self.descriptors())?;
        debug!(steps = self.steps.len(), "registered wizard steps");

        let last = self.steps.len() - 1;
        if handle.active_step_index()? > last {
            handle.go_to(last)?;
        }
        Ok(true)
    }

    /// The step the controller currently points at
    pub fn active(&self, handle: &WizardHandle) -> Result<Option<&Step<B>>, WizardError> {
        Ok(self.steps.get(handle.active_step_index()?))
    }
}
