//! Email rules
//!
//! A minimal structural check, not RFC 5322.

use super::ValidationMode;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email cannot be empty.")]
    Empty,
    #[error("Please enter a valid email address (e.g., user@example.com).")]
    Malformed,
}

/// Validate a trimmed email address.
///
/// Live mode has no empty branch: an empty value is simply malformed.
pub fn validate_email(email: &str, mode: ValidationMode) -> Result<(), EmailError> {
    if mode == ValidationMode::Submit && email.is_empty() {
        return Err(EmailError::Empty);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_emails() {
        for email in ["user@example.com", "a@b.co", "first.last@sub.domain.org", "x+y@z.io"] {
            assert_eq!(validate_email(email, ValidationMode::Submit), Ok(()));
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            validate_email("", ValidationMode::Submit),
            Err(EmailError::Empty)
        );
    }

    #[test]
    fn test_malformed() {
        for email in [
            "user@example",
            "bad",
            "@example.com",
            "user@.com",
            "user@@example.com",
            "us er@example.com",
            "user@example.",
        ] {
            assert_eq!(
                validate_email(email, ValidationMode::Submit),
                Err(EmailError::Malformed),
                "{email}"
            );
        }
    }

    #[test]
    fn test_live_empty_is_malformed() {
        assert_eq!(
            validate_email("", ValidationMode::Live),
            Err(EmailError::Malformed)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(EmailError::Empty.to_string(), "Email cannot be empty.");
        assert_eq!(
            EmailError::Malformed.to_string(),
            "Please enter a valid email address (e.g., user@example.com)."
        );
    }
}
