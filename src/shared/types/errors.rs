use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountError {
    /// A required field is missing or malformed. Displays the bare reason
    /// so it can be shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("{0}")]
    Authentication(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl AccountError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    /// Credential mismatch. The message never says whether the account exists.
    pub fn password_incorrect() -> Self {
        Self::Authentication("password incorrect".to_string())
    }

    /// Whether the failure came from the storage layer (constraint
    /// violation, missing row, or the database itself).
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Conflict(_) | Self::NotFound { .. } | Self::Database(_)
        )
    }
}

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;
