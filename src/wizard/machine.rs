//! Wizard state machine
//!
//! Owns the current step, the form and the error map. Forward transitions
//! are guarded by step validation; backward transitions are free. The
//! submission status doubles as the lock that keeps a second registration
//! from starting while one is in flight.

use super::payload::RegistrationPayload;
use super::pricing::{self, PriceBreakdown};
use super::schema::{self, FieldDescriptor};
use super::seed::SeedParams;
use super::validation::{clear_field_error, validate_step};
use crate::catalog::{IndustryConfig, PlanConfig};
use crate::error::{SubmitBlocked, SubmitError, WizardError};
use crate::state::{
    ErrorMap, FieldKey, FieldValue, FormState, Step, SubmissionStatus, WizardState,
};
use crate::submitter::RegistrationSubmitter;
use chrono::Utc;
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Called once with the accepted payload after a successful registration
pub type SuccessHandler = Box<dyn FnMut(&RegistrationPayload) + Send>;

pub struct WizardStateMachine {
    state: WizardState,
    in_flight: Option<RegistrationPayload>,
    registration: Option<RegistrationPayload>,
    on_success: Option<SuccessHandler>,
}

impl fmt::Debug for WizardStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardStateMachine")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .field("registration", &self.registration)
            .field("on_success", &self.on_success.is_some())
            .finish()
    }
}

impl Default for WizardStateMachine {
    fn default() -> Self {
        Self::new(SeedParams::default())
    }
}

impl WizardStateMachine {
    pub fn new(seed: SeedParams) -> Self {
        let plan = seed.plan_or_default();
        let industry = seed.industry_or_default();
        let billing = seed.billing_or_default();
        debug!(%plan, %industry, billing = billing.label(), "creating signup wizard");

        Self {
            state: WizardState::new(FormState::new(plan, industry).with_billing(billing)),
            in_flight: None,
            registration: None,
            on_success: None,
        }
    }

    /// Register the post-registration handoff
    pub fn on_success(mut self, handler: impl FnMut(&RegistrationPayload) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step()
    }

    pub fn form(&self) -> &FormState {
        self.state.form()
    }

    pub fn errors(&self) -> &ErrorMap {
        self.state.errors()
    }

    pub fn submission_status(&self) -> SubmissionStatus {
        self.state.submission_status()
    }

    pub fn submission_error(&self) -> Option<&str> {
        self.state.submission_error()
    }

    /// The accepted payload, once registration has succeeded
    pub fn registration(&self) -> Option<&RegistrationPayload> {
        self.registration.as_ref()
    }

    pub fn industry_config(&self) -> &'static IndustryConfig {
        self.state.form.industry().config()
    }

    pub fn plan_config(&self) -> &'static PlanConfig {
        self.state.form.plan().config()
    }

    pub fn pricing(&self) -> PriceBreakdown {
        pricing::derive(self.plan_config(), self.state.form.billing_cycle())
    }

    /// Fields of the current step, re-derived from the catalogs
    pub fn current_fields(&self) -> Vec<FieldDescriptor> {
        schema::fields_for_step(self.current_step(), self.industry_config())
    }

    /// True while a submission is in flight or after activation
    pub fn is_locked(&self) -> bool {
        matches!(
            self.state.submission_status,
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded
        )
    }

    /// Set a field value and clear its error.
    ///
    /// No validation runs here; that is deferred to `advance`.
    pub fn update_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), WizardError> {
        if self.is_locked() {
            return Err(WizardError::Locked(self.state.submission_status));
        }
        self.state.form.set(key, value)?;
        clear_field_error(&mut self.state.errors, key);
        Ok(())
    }

    /// Validate the current step and move forward if it is clean.
    ///
    /// Returns the step the wizard is on afterwards.
    pub fn advance(&mut self) -> Step {
        let step = self.state.current_step;
        if self.is_locked() {
            warn!(status = %self.state.submission_status, "advance ignored while locked");
            return step;
        }

        let errors = validate_step(step, &self.state.form, self.industry_config());
        if errors.is_empty() {
            self.state.current_step = step.next();
            self.state.errors.clear();
            debug!(from = step.number(), to = self.state.current_step.number(), "advanced");
        } else {
            debug!(step = step.number(), count = errors.len(), "step has validation errors");
            self.state.errors = errors;
        }
        self.state.current_step
    }

    /// Move back one step without validating either step
    pub fn retreat(&mut self) -> Step {
        let step = self.state.current_step;
        if self.is_locked() {
            warn!(status = %self.state.submission_status, "retreat ignored while locked");
            return step;
        }

        self.state.current_step = step.prev();
        self.state.errors.clear();
        debug!(from = step.number(), to = self.state.current_step.number(), "retreated");
        self.state.current_step
    }

    /// Validate the consent step and enter `Submitting`.
    ///
    /// The returned payload must be passed to a submitter and its outcome
    /// reported through [`Self::complete_submit`].
    pub fn begin_submit(&mut self) -> Result<RegistrationPayload, SubmitBlocked> {
        match self.state.submission_status {
            SubmissionStatus::Submitting => return Err(SubmitBlocked::InFlight),
            SubmissionStatus::Succeeded => return Err(SubmitBlocked::AlreadyActivated),
            SubmissionStatus::Idle | SubmissionStatus::Failed => {}
        }
        if !self.state.current_step.is_final() {
            return Err(SubmitBlocked::NotOnFinalStep);
        }

        let errors = validate_step(Step::Consent, &self.state.form, self.industry_config());
        if !errors.is_empty() {
            self.state.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }
        self.state.errors.clear();

        let payload = RegistrationPayload::from_form(&self.state.form, Uuid::new_v4(), Utc::now());
        self.state.submission_status = SubmissionStatus::Submitting;
        self.state.submission_error = None;
        self.in_flight = Some(payload.clone());
        info!(id = %payload.id, plan = %payload.plan, "submitting registration");

        Ok(payload)
    }

    /// Record the outcome of the in-flight submission
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>) -> SubmissionStatus {
        let Some(payload) = self.in_flight.take() else {
            warn!("submission result received with nothing in flight");
            return self.state.submission_status;
        };

        match result {
            Ok(()) => {
                info!(id = %payload.id, "registration accepted");
                self.state.submission_status = SubmissionStatus::Succeeded;
                if let Some(handler) = self.on_success.as_mut() {
                    handler(&payload);
                }
                self.registration = Some(payload);
            }
            Err(err) => {
                warn!(id = %payload.id, error = %err, "registration failed");
                self.state.submission_status = SubmissionStatus::Failed;
                self.state.submission_error = Some(err.to_string());
            }
        }
        self.state.submission_status
    }

    /// Submit and await the registration in one call
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<SubmissionStatus, SubmitBlocked>
    where
        S: RegistrationSubmitter + ?Sized,
    {
        let payload = self.begin_submit()?;
        let result = submitter.register(payload).await;
        Ok(self.complete_submit(result))
    }
}
