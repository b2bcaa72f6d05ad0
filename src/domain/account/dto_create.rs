use super::validation::{limit_length, require, require_email_format, ValidationMode};
use crate::shared::AccountResult;

/// Account fields as supplied by a caller. `password` is plaintext.
#[derive(Debug, Clone, Default)]
pub struct CreateAccountDto {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub dummy: bool,
}

impl CreateAccountDto {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: password.into(),
            dummy: false,
        }
    }

    /// Check the fields required by `mode`. The first failed check wins.
    pub fn validate(&self, mode: ValidationMode) -> AccountResult<()> {
        match mode {
            ValidationMode::Login => {
                require(&self.email, "Email")?;
                require(&self.password, "Password")?;
            }
            ValidationMode::Registration => {
                require(&self.first_name, "FirstName")?;
                require(&self.last_name, "LastName")?;
                require(&self.email, "Email")?;
                require(&self.password, "Password")?;
                require_email_format(&self.email)?;
                limit_length(&self.first_name, "FirstName")?;
                limit_length(&self.last_name, "LastName")?;
                limit_length(&self.email, "Email")?;
            }
        }
        Ok(())
    }
}
