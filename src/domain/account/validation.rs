use validator::ValidateEmail;

use crate::shared::{AccountError, AccountResult};

/// Selects which checks `validate` applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Only email and password are required.
    Login,
    /// All names, email and password are required and the email must be
    /// well-formed.
    #[default]
    Registration,
}

impl From<&str> for ValidationMode {
    /// `"login"` selects login checks; any other tag falls back to
    /// registration.
    fn from(mode: &str) -> Self {
        match mode {
            "login" => Self::Login,
            _ => Self::Registration,
        }
    }
}

/// Width of the `email`, `first_name` and `last_name` columns.
pub const MAX_FIELD_CHARS: usize = 100;

pub(super) fn require(value: &str, field: &str) -> AccountResult<()> {
    if value.is_empty() {
        return Err(AccountError::validation(format!("{} is required", field)));
    }
    Ok(())
}

pub(super) fn require_email_format(email: &str) -> AccountResult<()> {
    if !email.validate_email() {
        return Err(AccountError::validation("Invalid Email"));
    }
    Ok(())
}

pub(super) fn limit_length(value: &str, field: &str) -> AccountResult<()> {
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(AccountError::validation(format!("{} is too long", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tags() {
        assert_eq!(ValidationMode::from("login"), ValidationMode::Login);
        assert_eq!(ValidationMode::from("register"), ValidationMode::Registration);
        assert_eq!(ValidationMode::from(""), ValidationMode::Registration);
        assert_eq!(ValidationMode::from("LOGIN"), ValidationMode::Registration);
        assert_eq!(ValidationMode::default(), ValidationMode::Registration);
    }

    #[test]
    fn email_format() {
        assert!(require_email_format("a@b.com").is_ok());
        assert!(require_email_format("first.last+tag@example.org").is_ok());
        assert!(require_email_format("not-an-email").is_err());
        assert!(require_email_format("a@").is_err());
        assert!(require_email_format("@b.com").is_err());
    }

    #[test]
    fn length_limit_counts_characters() {
        assert!(limit_length(&"a".repeat(MAX_FIELD_CHARS), "FirstName").is_ok());
        assert!(limit_length(&"é".repeat(MAX_FIELD_CHARS), "FirstName").is_ok());

        let err = limit_length(&"a".repeat(MAX_FIELD_CHARS + 1), "FirstName").unwrap_err();
        assert_eq!(err.to_string(), "FirstName is too long");
    }
}
