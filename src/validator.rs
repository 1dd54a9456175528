//! Live and submit-time validation bound to the registration form

use crate::state::{FeedbackRenderer, RegistrationForm};
use crate::submitter::{FormSubmitter, SubmitError};
use crate::validation::{validate_field, FieldId, ValidationMode};

pub const SUCCESS_MESSAGE: &str = "Registration successful!";
pub const ERROR_HEADING: &str = "Please correct the following errors:";

/// Where the submit handler currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub is_valid: bool,
    /// Every failure message in username, email, password order
    pub messages: Vec<String>,
}

/// Owns the form, its feedback elements and the submitter.
///
/// Created once with [`FormValidator::bind`]; all input and submit events
/// are routed through it.
pub struct FormValidator {
    form: RegistrationForm,
    feedback: FeedbackRenderer,
    submitter: Box<dyn FormSubmitter>,
    phase: SubmitPhase,
    live_mode: ValidationMode,
}

impl FormValidator {
    pub fn bind(form: RegistrationForm, submitter: Box<dyn FormSubmitter>) -> Self {
        Self {
            form,
            feedback: FeedbackRenderer::new(),
            submitter,
            phase: SubmitPhase::Idle,
            live_mode: ValidationMode::Live,
        }
    }

    /// Run the submit-time rules on every input event instead of the
    /// simplified live rules.
    pub fn with_unified_live_messages(mut self, unified: bool) -> Self {
        self.live_mode = if unified {
            ValidationMode::Submit
        } else {
            ValidationMode::Live
        };
        self
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegistrationForm {
        &mut self.form
    }

    pub fn feedback(&self) -> &FeedbackRenderer {
        &self.feedback
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Handle a value change on `field`.
    pub fn on_input(&mut self, field: FieldId) {
        let value = self.form.field(field).value();
        match validate_field(field, value, self.live_mode) {
            Ok(()) => self.feedback.hide_field_feedback(field),
            Err(err) => {
                tracing::trace!(?field, %err, "Live validation failed");
                self.feedback.show_field_error(field, err.slot_message());
            }
        }
    }

    /// Validate every field and, if all pass, hand the registration to the
    /// submitter exactly once.
    pub async fn on_submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.phase = SubmitPhase::Validating;
        let result = self.run_submit().await;
        self.phase = SubmitPhase::Idle;
        result
    }

    async fn run_submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.feedback.reset_aggregate();
        self.feedback.hide_all_field_feedback();

        let mut is_valid = true;
        let mut messages = Vec::new();

        // No short-circuit: every slot is refreshed in one pass
        for field in FieldId::ALL {
            let value = self.form.field(field).value();
            if let Err(err) = validate_field(field, value, ValidationMode::Submit) {
                is_valid = false;
                messages.push(err.to_string());
                self.feedback.show_field_error(err.field(), err.slot_message());
            }
        }

        tracing::debug!(is_valid, errors = messages.len(), "Submit validation finished");

        if is_valid {
            self.feedback.show_aggregate_success(SUCCESS_MESSAGE);
            let registration = self.form.registration();
            tracing::info!(
                username = %registration.username,
                email = %registration.email,
                password = %registration.password,
                "Form submitted successfully"
            );
            self.submitter.submit(&registration).await?;
        } else if messages.is_empty() {
            self.feedback.hide_aggregate();
        } else {
            self.feedback.show_aggregate_errors(ERROR_HEADING, &messages);
        }

        Ok(SubmitOutcome { is_valid, messages })
    }
}
