//! Username rules

use super::ValidationMode;
use thiserror::Error;

/// Minimum username length in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Username validation failures, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("Username cannot be empty.")]
    Empty,
    #[error("Username must be at least 3 characters long.")]
    TooShort,
    #[error("Username can only contain letters, numbers, and underscores.")]
    InvalidCharacters,
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Validate a trimmed username.
///
/// Live mode only checks the length, so an empty value reports
/// [`UsernameError::TooShort`] rather than [`UsernameError::Empty`].
pub fn validate_username(username: &str, mode: ValidationMode) -> Result<(), UsernameError> {
    let len = username.chars().count();
    match mode {
        ValidationMode::Live => {
            if len < MIN_USERNAME_LENGTH {
                return Err(UsernameError::TooShort);
            }
            Ok(())
        }
        ValidationMode::Submit => {
            if len == 0 {
                return Err(UsernameError::Empty);
            }
            if len < MIN_USERNAME_LENGTH {
                return Err(UsernameError::TooShort);
            }
            if !username.chars().all(is_username_char) {
                return Err(UsernameError::InvalidCharacters);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_usernames() {
        for name in ["abc", "validUser_1", "___", "A1_b2_C3", "user123"] {
            assert_eq!(validate_username(name, ValidationMode::Submit), Ok(()));
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            validate_username("", ValidationMode::Submit),
            Err(UsernameError::Empty)
        );
    }

    #[test]
    fn test_too_short() {
        for name in ["a", "ab", "_1"] {
            assert_eq!(
                validate_username(name, ValidationMode::Submit),
                Err(UsernameError::TooShort)
            );
        }
    }

    #[test]
    fn test_short_wins_over_invalid_characters() {
        assert_eq!(
            validate_username("a-", ValidationMode::Submit),
            Err(UsernameError::TooShort)
        );
    }

    #[test]
    fn test_invalid_characters() {
        for name in ["user-name", "user name", "user.name", "üser", "abc!"] {
            assert_eq!(
                validate_username(name, ValidationMode::Submit),
                Err(UsernameError::InvalidCharacters)
            );
        }
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // Two multi-byte chars are still too short
        assert_eq!(
            validate_username("éé", ValidationMode::Submit),
            Err(UsernameError::TooShort)
        );
    }

    #[test]
    fn test_live_reports_short_for_empty() {
        assert_eq!(
            validate_username("", ValidationMode::Live),
            Err(UsernameError::TooShort)
        );
    }

    #[test]
    fn test_live_ignores_character_set() {
        assert_eq!(validate_username("user-name", ValidationMode::Live), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(UsernameError::Empty.to_string(), "Username cannot be empty.");
        assert_eq!(
            UsernameError::TooShort.to_string(),
            "Username must be at least 3 characters long."
        );
        assert_eq!(
            UsernameError::InvalidCharacters.to_string(),
            "Username can only contain letters, numbers, and underscores."
        );
    }
}
