//! Application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fleet_signup::error::{SubmitBlocked, SubmitError};
use fleet_signup::state::{FieldValue, Step, SubmissionStatus};
use fleet_signup::submitter::RegistrationSubmitter;
use fleet_signup::wizard::{FieldDescriptor, FieldInput, WizardStateMachine};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

type PendingSubmission = oneshot::Receiver<Result<(), SubmitError>>;

/// Main application struct
pub struct App {
    /// The signup wizard being driven
    pub wizard: WizardStateMachine,
    /// Where registrations are sent
    submitter: Arc<dyn RegistrationSubmitter>,
    /// Result channel of the in-flight registration
    pending: Option<PendingSubmission>,
    /// Index of the focused field within the current step
    pub active_field: usize,
    /// Highlighted option of the focused multi-select
    pub option_cursor: usize,
    /// Whether the submission error dialog is showing
    pub show_submission_error: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(wizard: WizardStateMachine, submitter: Arc<dyn RegistrationSubmitter>) -> Self {
        Self {
            wizard,
            submitter,
            pending: None,
            active_field: 0,
            option_cursor: 0,
            show_submission_error: false,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Descriptor of the focused field
    pub fn active_descriptor(&self) -> Option<FieldDescriptor> {
        self.wizard.current_fields().get(self.active_field).copied()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.wizard.submission_status() {
            SubmissionStatus::Succeeded => {
                self.quit = true;
                return Ok(());
            }
            // Input is ignored while the registration is in flight
            SubmissionStatus::Submitting => return Ok(()),
            SubmissionStatus::Idle | SubmissionStatus::Failed => {}
        }

        if self.show_submission_error {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.show_submission_error = false;
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => self.confirm_step(),
            KeyCode::Esc => self.go_back(),
            _ => self.edit_active_field(key)?,
        }
        Ok(())
    }

    /// Move to next field
    pub fn next_field(&mut self) {
        let count = self.wizard.current_fields().len();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
            self.option_cursor = 0;
        }
    }

    /// Move to previous field
    pub fn prev_field(&mut self) {
        let count = self.wizard.current_fields().len();
        if count == 0 {
            return;
        }
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
        self.option_cursor = 0;
    }

    /// Enter: advance, or submit on the final step
    fn confirm_step(&mut self) {
        let before = self.wizard.current_step();
        if before.is_final() {
            self.start_submission();
            return;
        }

        if self.wizard.advance() == before {
            self.focus_first_error();
        } else {
            self.reset_focus();
        }
    }

    /// Esc: previous step, or quit from the first one
    fn go_back(&mut self) {
        if self.wizard.current_step() == Step::Contact {
            self.quit = true;
            return;
        }
        self.wizard.retreat();
        self.reset_focus();
    }

    fn reset_focus(&mut self) {
        self.active_field = 0;
        self.option_cursor = 0;
    }

    fn focus_first_error(&mut self) {
        let errors = self.wizard.errors();
        if let Some(index) = self
            .wizard
            .current_fields()
            .iter()
            .position(|f| errors.contains_key(&f.key))
        {
            self.active_field = index;
            self.option_cursor = 0;
        }
    }

    /// Apply an editing key to the focused field
    fn edit_active_field(&mut self, key: KeyEvent) -> Result<()> {
        let Some(field) = self.active_descriptor() else {
            return Ok(());
        };
        // Chorded characters are shortcuts, never input
        if matches!(key.code, KeyCode::Char(_))
            && key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Ok(());
        }
        let form = self.wizard.form();

        let value = match (field.input, key.code) {
            (FieldInput::Text, KeyCode::Char(c)) => {
                let mut text = form.get(field.key).as_text().to_string();
                text.push(c);
                Some(FieldValue::Text(text))
            }
            (FieldInput::Text, KeyCode::Backspace) => {
                let mut text = form.get(field.key).as_text().to_string();
                text.pop();
                Some(FieldValue::Text(text))
            }
            (FieldInput::Select(options), KeyCode::Right | KeyCode::Char(' ')) => {
                cycle_option(options, form.text(field.key), true).map(FieldValue::text)
            }
            (FieldInput::Select(options), KeyCode::Left) => {
                cycle_option(options, form.text(field.key), false).map(FieldValue::text)
            }
            (FieldInput::MultiSelect(options), KeyCode::Right) if !options.is_empty() => {
                self.option_cursor = (self.option_cursor + 1) % options.len();
                None
            }
            (FieldInput::MultiSelect(options), KeyCode::Left) if !options.is_empty() => {
                self.option_cursor = (self.option_cursor + options.len() - 1) % options.len();
                None
            }
            (FieldInput::MultiSelect(options), KeyCode::Char(' ')) => {
                options.get(self.option_cursor).map(|choice| {
                    FieldValue::Choices(toggle_choice(form.choices(field.key), options, choice))
                })
            }
            (FieldInput::Checkbox, KeyCode::Char(' ')) => {
                Some(FieldValue::Flag(!form.flag(field.key)))
            }
            (FieldInput::Industry, KeyCode::Right | KeyCode::Char(' ')) => {
                Some(FieldValue::Industry(form.industry().next()))
            }
            (FieldInput::Industry, KeyCode::Left) => {
                Some(FieldValue::Industry(form.industry().prev()))
            }
            (FieldInput::Plan, KeyCode::Right | KeyCode::Char(' ')) => {
                Some(FieldValue::Plan(form.plan().next()))
            }
            (FieldInput::Plan, KeyCode::Left) => Some(FieldValue::Plan(form.plan().prev())),
            (FieldInput::Billing, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                Some(FieldValue::Billing(form.billing_cycle().toggle()))
            }
            _ => None,
        };

        if let Some(value) = value {
            self.wizard.update_field(field.key, value)?;
        }
        Ok(())
    }

    /// Start the registration on a background task
    fn start_submission(&mut self) {
        match self.wizard.begin_submit() {
            Ok(payload) => {
                let submitter = Arc::clone(&self.submitter);
                let (tx, rx) = oneshot::channel();
                tokio::spawn(async move {
                    let result = submitter.register(payload).await;
                    // A closed receiver means the app already quit
                    let _ = tx.send(result);
                });
                self.pending = Some(rx);
            }
            Err(SubmitBlocked::Invalid) => self.focus_first_error(),
            Err(blocked) => tracing::debug!(%blocked, "submission not started"),
        }
    }

    /// Collect the registration result if it has arrived
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmitError::Interrupted),
        };
        self.pending = None;

        if self.wizard.complete_submit(result) == SubmissionStatus::Failed {
            self.show_submission_error = true;
        }
    }
}

/// Next or previous option after `current`; the first (or last) when unset
fn cycle_option(options: &[&'static str], current: &str, forward: bool) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let next = match options.iter().position(|o| *o == current) {
        Some(i) if forward => (i + 1) % options.len(),
        Some(i) => (i + options.len() - 1) % options.len(),
        None if forward => 0,
        None => options.len() - 1,
    };
    Some(options[next])
}

/// Flip `choice` in `selected`, keeping option order
fn toggle_choice(selected: &[String], options: &[&str], choice: &str) -> Vec<String> {
    options
        .iter()
        .filter(|option| {
            let on = selected.iter().any(|s| s == *option);
            if **option == choice {
                !on
            } else {
                on
            }
        })
        .map(|option| option.to_string())
        .collect()
}
