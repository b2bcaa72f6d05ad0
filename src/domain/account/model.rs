use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted account. Soft-deleted rows never surface as an `Account`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// bcrypt hash, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub dummy: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row to insert. The password has already been hashed.
#[derive(Clone, Debug)]
pub struct NewAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub dummy: bool,
}

/// Overwrite applied to the account matching `email`.
#[derive(Clone, Debug)]
pub struct AccountUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}
