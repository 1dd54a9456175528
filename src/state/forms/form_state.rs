//! Registration form state

use super::field::FormField;
use crate::validation::FieldId;
use serde::Serialize;

/// Number of focusable rows: three inputs plus the action panel
const FOCUS_ROWS: usize = 4;
const ACTION_PANEL_INDEX: usize = 3;

/// Buttons on the action panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Register,
    Cancel,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Register, FormButton::Cancel];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Cancel => "Cancel",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Register => Self::Cancel,
            Self::Cancel => Self::Register,
        }
    }
}

/// Trimmed values handed over on a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The username / email / password form
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl RegistrationForm {
    pub fn new(mask_password: bool) -> Self {
        let password = if mask_password {
            FormField::masked(FieldId::Password)
        } else {
            FormField::new(FieldId::Password)
        };
        Self {
            username: FormField::new(FieldId::Username),
            email: FormField::new(FieldId::Email),
            password,
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Username => &mut self.username,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    /// The focused input, or `None` when the action panel has focus
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn is_action_panel_active(&self) -> bool {
        self.active_field_index == ACTION_PANEL_INDEX
    }

    #[cfg(test)]
    pub fn focus_action_panel(&mut self) {
        self.active_field_index = ACTION_PANEL_INDEX;
    }

    pub fn registration(&self) -> Registration {
        Registration {
            username: self.username.trimmed().to_string(),
            email: self.email.trimmed().to_string(),
            password: self.password.trimmed().to_string(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FOCUS_ROWS
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ACTION_PANEL_INDEX);
    }
}
