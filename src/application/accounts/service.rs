//! Account service — application-layer orchestration
//!
//! Validation, password hashing and persistence of accounts. Callers
//! always hand in plaintext passwords; what gets stored (and returned) is
//! always the bcrypt hash.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    Account, AccountError, AccountRepositoryInterface, AccountResult, AccountUpdate,
    CreateAccountDto, NewAccount, UpdateAccountDto, ValidationMode,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DEFAULT_HASH_COST};

/// Generic over `R: AccountRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct AccountService<R: AccountRepositoryInterface> {
    repo: Arc<R>,
    hash_cost: u32,
}

impl<R: AccountRepositoryInterface> AccountService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_hash_cost(repo, DEFAULT_HASH_COST)
    }

    pub fn with_hash_cost(repo: Arc<R>, hash_cost: u32) -> Self {
        Self { repo, hash_cost }
    }

    /// Trim and hash a plaintext password with this service's cost.
    pub fn hash_password(&self, plaintext: &str) -> AccountResult<String> {
        hash_password(plaintext, self.hash_cost)
    }

    // ── Lookups ─────────────────────────────────────────────────

    /// `Ok(None)` when the email is unknown; infrastructure failures stay
    /// in the error channel.
    pub async fn fetch_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        self.repo.find_by_email(email).await
    }

    /// Like [`fetch_by_email`](Self::fetch_by_email) but an unknown email
    /// is an `AccountError::NotFound`.
    pub async fn fetch_by_email_strict(&self, email: &str) -> AccountResult<Account> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::NotFound {
                entity: "Account",
                field: "email",
                value: email.to_string(),
            })
    }

    // ── Writes ──────────────────────────────────────────────────

    /// Persist a new account. `dto` is expected to have passed
    /// registration validation already; see [`register`](Self::register).
    pub async fn create(&self, dto: CreateAccountDto) -> AccountResult<Account> {
        let password_hash = self.hash_password(&dto.password)?;

        let account = self
            .repo
            .insert_account(NewAccount {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password_hash,
                dummy: dto.dummy,
            })
            .await
            .inspect_err(|e| {
                if matches!(e, AccountError::Conflict(_)) {
                    warn!("Registration rejected: email already in use");
                }
            })?;

        info!(id = account.id, email = %account.email, "Account created");
        Ok(account)
    }

    /// Validate in registration mode, then create.
    pub async fn register(&self, dto: CreateAccountDto) -> AccountResult<Account> {
        dto.validate(ValidationMode::Registration)?;
        self.create(dto).await
    }

    /// Overwrite names and password of the account with `dto.email` and
    /// clear its `dummy` flag. The new password is hashed like on create.
    pub async fn update(&self, dto: UpdateAccountDto) -> AccountResult<()> {
        let password_hash = self.hash_password(&dto.password)?;
        let email = dto.email.clone();

        self.repo
            .update_by_email(AccountUpdate {
                email: dto.email,
                first_name: dto.first_name,
                last_name: dto.last_name,
                password_hash,
            })
            .await?;

        info!(email = %email, "Account updated");
        Ok(())
    }

    // ── Authentication ──────────────────────────────────────────

    /// Look the account up and check the password. An unknown email fails
    /// exactly like a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> AccountResult<Account> {
        let Some(account) = self.fetch_by_email(email).await? else {
            debug!(email, "Authentication failed: unknown account");
            return Err(AccountError::password_incorrect());
        };

        verify_password(password, &account.password_hash).inspect_err(|_| {
            debug!(email, "Authentication failed: password mismatch");
        })?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::infrastructure::crypto::password::MIN_HASH_COST;

    /// In-memory stand-in for the SeaORM repository.
    #[derive(Default)]
    struct MemoryRepo {
        rows: Mutex<Vec<Account>>,
        offline: bool,
    }

    impl MemoryRepo {
        fn offline() -> Self {
            Self {
                offline: true,
                ..Default::default()
            }
        }

        fn check_online(&self) -> AccountResult<()> {
            if self.offline {
                return Err(sea_orm::DbErr::Custom("database unavailable".into()).into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AccountRepositoryInterface for MemoryRepo {
        async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
            self.check_online()?;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|a| a.email == email).cloned())
        }

        async fn insert_account(&self, new: NewAccount) -> AccountResult<Account> {
            self.check_online()?;
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|a| a.email == new.email) {
                return Err(AccountError::Conflict(new.email));
            }
            let now = Utc::now();
            let account = Account {
                id: rows.len() as i32 + 1,
                email: new.email,
                first_name: new.first_name,
                last_name: new.last_name,
                password_hash: new.password_hash,
                dummy: new.dummy,
                created_at: now,
                updated_at: now,
            };
            rows.push(account.clone());
            Ok(account)
        }

        async fn update_by_email(&self, update: AccountUpdate) -> AccountResult<()> {
            self.check_online()?;
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.iter_mut().find(|a| a.email == update.email) else {
                return Err(AccountError::NotFound {
                    entity: "Account",
                    field: "email",
                    value: update.email,
                });
            };
            row.first_name = update.first_name;
            row.last_name = update.last_name;
            row.password_hash = update.password_hash;
            row.dummy = false;
            row.updated_at = Utc::now();
            Ok(())
        }
    }

    fn service() -> AccountService<MemoryRepo> {
        AccountService::with_hash_cost(Arc::new(MemoryRepo::default()), MIN_HASH_COST)
    }

    fn dto() -> CreateAccountDto {
        CreateAccountDto::new("A", "B", "a@b.com", "pw12345")
    }

    #[test]
    fn default_service_hashes_with_cost_fourteen() {
        let svc = AccountService::new(Arc::new(MemoryRepo::default()));
        let hashed = svc.hash_password("pw12345").unwrap();
        assert!(hashed.starts_with("$2b$14$"), "unexpected hash prefix: {}", hashed);
    }

    #[tokio::test]
    async fn create_stores_hash_not_plaintext() {
        let svc = service();
        let account = svc.create(dto()).await.unwrap();

        assert_ne!(account.password_hash, "pw12345");
        assert!(verify_password("pw12345", &account.password_hash).is_ok());

        let stored = svc.fetch_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(stored.password_hash, account.password_hash);
    }

    #[tokio::test]
    async fn create_trims_password_before_hashing() {
        let svc = service();
        let account = svc
            .create(CreateAccountDto { password: "  pw12345  ".into(), ..dto() })
            .await
            .unwrap();
        assert!(verify_password("pw12345", &account.password_hash).is_ok());
    }

    #[tokio::test]
    async fn register_validates_first() {
        let svc = service();
        let err = svc
            .register(CreateAccountDto { email: "not-an-email".into(), ..dto() })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::Validation(ref m) if m == "Invalid Email"));
        assert!(svc.fetch_by_email("not-an-email").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_rehashes_and_clears_dummy() {
        let svc = service();
        svc.create(CreateAccountDto { dummy: true, ..dto() }).await.unwrap();

        svc.update(UpdateAccountDto {
            email: "a@b.com".into(),
            first_name: "C".into(),
            last_name: "D".into(),
            password: "new-secret".into(),
        })
        .await
        .unwrap();

        let account = svc.fetch_by_email_strict("a@b.com").await.unwrap();
        assert_eq!(account.first_name, "C");
        assert_eq!(account.last_name, "D");
        assert!(!account.dummy);
        assert_ne!(account.password_hash, "new-secret");
        assert!(verify_password("new-secret", &account.password_hash).is_ok());
    }

    #[tokio::test]
    async fn strict_fetch_reports_missing_account() {
        let svc = service();
        let err = svc.fetch_by_email_strict("ghost@b.com").await.unwrap_err();
        assert!(matches!(err, AccountError::NotFound { field: "email", .. }));
    }

    #[tokio::test]
    async fn fetch_keeps_outage_apart_from_not_found() {
        let svc = AccountService::with_hash_cost(Arc::new(MemoryRepo::offline()), MIN_HASH_COST);

        let err = svc.fetch_by_email("a@b.com").await.unwrap_err();
        assert!(matches!(err, AccountError::Database(_)));

        let err = svc.fetch_by_email_strict("a@b.com").await.unwrap_err();
        assert!(matches!(err, AccountError::Database(_)));
    }

    #[tokio::test]
    async fn authenticate_does_not_reveal_unknown_accounts() {
        let svc = service();
        svc.create(dto()).await.unwrap();

        let wrong = svc.authenticate("a@b.com", "wrong").await.unwrap_err();
        let unknown = svc.authenticate("ghost@b.com", "pw12345").await.unwrap_err();
        assert_eq!(wrong.to_string(), "password incorrect");
        assert_eq!(unknown.to_string(), wrong.to_string());

        let account = svc.authenticate("a@b.com", "pw12345").await.unwrap();
        assert_eq!(account.email, "a@b.com");
    }

    #[tokio::test]
    async fn hashing_failure_skips_persistence() {
        let svc = service();
        let err = svc
            .create(CreateAccountDto { password: "x".repeat(100), ..dto() })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::Hashing(_)));
        assert!(svc.fetch_by_email("a@b.com").await.unwrap().is_none());
    }
}
