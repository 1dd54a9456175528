//! Field validation rules for the registration form
//!
//! Each field has a submit-time check and a simpler live check that runs on
//! every edit. Failures are plain values whose `Display` is the message shown
//! to the user.

mod email;
mod password;
mod username;

pub use email::{validate_email, EmailError};
pub use password::{validate_password, PasswordError};
pub use username::{validate_username, UsernameError};

use thiserror::Error;

/// Identifies one of the registration form's inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username,
    Email,
    Password,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 3] = [FieldId::Username, FieldId::Email, FieldId::Password];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

/// Which rule set to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Runs on every input event
    Live,
    /// Runs when the form is submitted
    Submit,
}

/// A failed check on a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error(transparent)]
    Username(#[from] UsernameError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

impl FieldError {
    pub fn field(&self) -> FieldId {
        match self {
            Self::Username(_) => FieldId::Username,
            Self::Email(_) => FieldId::Email,
            Self::Password(_) => FieldId::Password,
        }
    }

    /// Message for the field's own feedback slot.
    ///
    /// Identical to `to_string()` except for the password composition
    /// failure, which has a shorter inline wording.
    pub fn slot_message(&self) -> String {
        match self {
            Self::Password(err) => err.short_message(),
            other => other.to_string(),
        }
    }
}

/// Validate a raw field value. The value is trimmed first.
pub fn validate_field(field: FieldId, value: &str, mode: ValidationMode) -> Result<(), FieldError> {
    let value = value.trim();
    match field {
        FieldId::Username => validate_username(value, mode)?,
        FieldId::Email => validate_email(value, mode)?,
        FieldId::Password => validate_password(value, mode)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(
            validate_field(FieldId::Username, "  ab  ", ValidationMode::Submit),
            Err(FieldError::Username(UsernameError::TooShort))
        );
        assert_eq!(
            validate_field(FieldId::Email, "  user@example.com\t", ValidationMode::Submit),
            Ok(())
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert_eq!(
            validate_field(FieldId::Password, "   ", ValidationMode::Submit),
            Err(FieldError::Password(PasswordError::Empty))
        );
    }

    #[test]
    fn test_error_reports_field() {
        let err = validate_field(FieldId::Email, "bad", ValidationMode::Submit).unwrap_err();
        assert_eq!(err.field(), FieldId::Email);
    }

    #[test]
    fn test_slot_message_differs_only_for_password_composition() {
        let err = FieldError::Password(PasswordError::Composition);
        assert_ne!(err.slot_message(), err.to_string());

        let err = FieldError::Username(UsernameError::InvalidCharacters);
        assert_eq!(err.slot_message(), err.to_string());
    }

    #[test]
    fn test_field_order() {
        assert_eq!(
            FieldId::ALL,
            [FieldId::Username, FieldId::Email, FieldId::Password]
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(FieldId::Username.label(), "Username");
        assert_eq!(FieldId::Email.label(), "Email");
        assert_eq!(FieldId::Password.label(), "Password");
    }
}
