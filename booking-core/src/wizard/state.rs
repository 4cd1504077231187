//! Wizard state and its pure transition function

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier carried by a step. Flows may use numbers or strings.
///
/// Numeric ids must be integers; `id = 1.5` does not parse. Ids are compared
/// and hashed, which a float variant could not support.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepId::Number(n) => write!(f, "{}", n),
            StepId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        StepId::Text(value.to_string())
    }
}

impl From<String> for StepId {
    fn from(value: String) -> Self {
        StepId::Text(value)
    }
}

impl From<i64> for StepId {
    fn from(value: i64) -> Self {
        StepId::Number(value)
    }
}

/// What the controller knows about a step. Only `id` is ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub id: StepId,
}

impl StepDescriptor {
    pub fn new(id: impl Into<StepId>) -> Self {
        Self { id: id.into() }
    }
}

/// Commands accepted by the wizard reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    Next,
    Previous,
    GoTo(usize),
    SetSteps(Vec<StepDescriptor>),
}

/// Navigation state of a single wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub active_step_index: usize,
    pub steps: Vec<StepDescriptor>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command, returning the next state.
    ///
    /// Out-of-range navigation returns the state unchanged.
    pub fn reduce(mut self, command: WizardCommand) -> Self {
        self.apply(command);
        self
    }

    /// In-place form of [`reduce`](Self::reduce). Returns whether anything changed.
    pub fn apply(&mut self, command: WizardCommand) -> bool {
        match command {
            WizardCommand::Next => {
                let next = self.active_step_index + 1;
                if next < self.steps.len() {
                    self.active_step_index = next;
                    true
                } else {
                    false
                }
            }
            WizardCommand::Previous => {
                if self.active_step_index > 0 {
                    self.active_step_index -= 1;
                    true
                } else {
                    false
                }
            }
            WizardCommand::GoTo(target) => {
                if target != self.active_step_index && target < self.steps.len() {
                    self.active_step_index = target;
                    true
                } else {
                    false
                }
            }
            WizardCommand::SetSteps(steps) => {
                // active_step_index is deliberately left alone
                let changed = self.steps != steps;
                self.steps = steps;
                changed
            }
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.active_step_index == 0
    }

    /// True on the final step, and also when there are no steps at all.
    pub fn is_last_step(&self) -> bool {
        self.active_step_index + 1 >= self.steps.len()
    }

    pub fn active_step(&self) -> Option<&StepDescriptor> {
        self.steps.get(self.active_step_index)
    }

    /// First index whose descriptor carries `id`.
    pub fn index_of(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|step| &step.id == id)
    }
}
