use super::validation::{limit_length, require, require_email_format};
use crate::shared::AccountResult;

/// New values for the account identified by `email`. `password` is
/// plaintext and is hashed before it is stored.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountDto {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl UpdateAccountDto {
    /// Same required fields as registration, checked in the same order.
    pub fn validate(&self) -> AccountResult<()> {
        require(&self.first_name, "FirstName")?;
        require(&self.last_name, "LastName")?;
        require(&self.email, "Email")?;
        require(&self.password, "Password")?;
        require_email_format(&self.email)?;
        limit_length(&self.first_name, "FirstName")?;
        limit_length(&self.last_name, "LastName")?;
        limit_length(&self.email, "Email")
    }
}
