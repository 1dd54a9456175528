//! Password strength rules

use super::ValidationMode;
use thiserror::Error;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The only non-alphanumeric characters a password may contain
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password cannot be empty.")]
    Empty,
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    #[error(
        "Password must include at least one uppercase letter, one lowercase letter, one number, and one special character."
    )]
    Composition,
}

impl PasswordError {
    /// Shorter wording used inside the field's own feedback slot.
    pub fn short_message(&self) -> String {
        match self {
            Self::Composition => {
                "Password must include uppercase, lowercase, number, and special character."
                    .to_string()
            }
            other => other.to_string(),
        }
    }
}

fn is_special(c: char) -> bool {
    PASSWORD_SPECIAL_CHARS.contains(c)
}

/// Whether every required character class is present and no foreign
/// character appears.
fn has_required_composition(password: &str) -> bool {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut special = false;

    for c in password.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            c if is_special(c) => special = true,
            _ => return false,
        }
    }

    lower && upper && digit && special
}

/// Validate a trimmed password.
pub fn validate_password(password: &str, mode: ValidationMode) -> Result<(), PasswordError> {
    let len = password.chars().count();
    if mode == ValidationMode::Submit && len == 0 {
        return Err(PasswordError::Empty);
    }
    if len < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if !has_required_composition(password) {
        return Err(PasswordError::Composition);
    }
    Ok(())
}
