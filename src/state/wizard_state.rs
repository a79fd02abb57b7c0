//! Composite wizard state

use super::forms::{FieldKey, FormState};
use super::step::Step;
use std::collections::BTreeMap;
use std::fmt;

/// Field key to human-readable message
pub type ErrorMap = BTreeMap<FieldKey, String>;

/// Registration submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Failed,
    Succeeded,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Failed => "failed",
            Self::Succeeded => "succeeded",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything one signup session holds
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub(crate) current_step: Step,
    pub(crate) form: FormState,
    pub(crate) errors: ErrorMap,
    pub(crate) submission_status: SubmissionStatus,
    pub(crate) submission_error: Option<String>,
}

impl WizardState {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, key: FieldKey) -> Option<&str> {
        self.errors.get(&key).map(String::as_str)
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.submission_status
    }

    /// Message from the latest failed submission attempt
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }
}
