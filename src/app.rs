//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{Form, FormButton, RegistrationForm, Tone};
use crate::submitter::FormSubmitter;
use crate::validator::FormValidator;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Validation layer bound to the registration form
    pub validator: FormValidator,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
    /// Styling of the status message, from the latest submit attempt
    pub status_tone: Tone,
    /// Whether a registration has been handed to the submitter
    submitted: bool,
    exit_on_submit: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance and bind the validator to a fresh form
    pub fn new(config: &TuiConfig, submitter: Box<dyn FormSubmitter>) -> Self {
        let form = RegistrationForm::new(config.mask_password());
        let validator = FormValidator::bind(form, submitter)
            .with_unified_live_messages(config.unified_live_messages());

        Self {
            validator,
            status_message: None,
            status_tone: Tone::default(),
            submitted: false,
            exit_on_submit: config.exit_on_submit(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_action_panel = self.validator.form().is_action_panel_active();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down if !on_action_panel => self.form_mut().next_field(),
            KeyCode::Tab => self.form_mut().next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form_mut().prev_field(),
            // Left/Right (and Down) move between buttons on the action panel
            KeyCode::Left | KeyCode::Right | KeyCode::Down if on_action_panel => {
                let form = self.form_mut();
                form.selected_button = form.selected_button.toggle();
            }
            KeyCode::Enter if on_action_panel => {
                let button = self.validator.form().selected_button;
                match button {
                    FormButton::Register => self.submit().await,
                    FormButton::Cancel => self.quit = true,
                }
            }
            KeyCode::Enter => self.form_mut().next_field(),
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('u') if ctrl => self.clear_active_field(),
            KeyCode::Char(c) if !ctrl => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn form_mut(&mut self) -> &mut RegistrationForm {
        self.validator.form_mut()
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.validator.form().active_field_id() {
            self.form_mut().field_mut(field).push_char(c);
            self.validator.on_input(field);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.validator.form().active_field_id() {
            if self.form_mut().field_mut(field).pop_char() {
                self.validator.on_input(field);
            }
        }
    }

    fn clear_active_field(&mut self) {
        if let Some(field) = self.validator.form().active_field_id() {
            // Clearing an empty field changes nothing, so it is not an input event
            if self.validator.form().field(field).is_empty() {
                return;
            }
            self.form_mut().field_mut(field).clear();
            self.validator.on_input(field);
        }
    }

    /// Run submit-time validation and submit if everything passes
    async fn submit(&mut self) {
        match self.validator.on_submit().await {
            Ok(outcome) if outcome.is_valid => {
                self.submitted = true;
                self.status_message = Some("Registration submitted".to_string());
                self.status_tone = Tone::Success;
                if self.exit_on_submit {
                    self.quit = true;
                }
            }
            Ok(outcome) => {
                let count = outcome.messages.len();
                let noun = if count == 1 { "error" } else { "errors" };
                self.status_message = Some(format!("{count} {noun} to fix"));
                self.status_tone = Tone::Error;
            }
            Err(err) => {
                tracing::error!("Submission failed: {err}");
                self.status_message = Some(format!("Submission failed: {err}"));
                self.status_tone = Tone::Error;
            }
        }
    }
}
