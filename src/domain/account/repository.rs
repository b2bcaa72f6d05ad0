use async_trait::async_trait;

use super::{Account, AccountUpdate, NewAccount};
use crate::shared::AccountResult;

#[async_trait]
pub trait AccountRepositoryInterface: Send + Sync {
    /// `Ok(None)` when no live account has this email. Storage failures
    /// come back as `Err`.
    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>>;

    /// Insert a new row; a duplicate email is `AccountError::Conflict`.
    async fn insert_account(&self, account: NewAccount) -> AccountResult<Account>;

    /// Overwrite names and password of the account matching
    /// `update.email` and clear its `dummy` flag.
    async fn update_by_email(&self, update: AccountUpdate) -> AccountResult<()>;
}
