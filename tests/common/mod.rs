use std::sync::Arc;

use account_records::infrastructure::crypto::MIN_HASH_COST;
use account_records::infrastructure::database::migrator::Migrator;
use account_records::{init_database, AccountRepository, AccountService, DatabaseConfig};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub struct TestContext {
    pub db: DatabaseConnection,
    pub service: AccountService<AccountRepository>,
}

/// Fresh in-memory database with migrations applied. Uses the cheapest
/// bcrypt cost to keep the suite fast.
pub async fn setup() -> TestContext {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    let service = AccountService::with_hash_cost(
        Arc::new(AccountRepository::new(db.clone())),
        MIN_HASH_COST,
    );

    TestContext { db, service }
}
