use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, SqlErr,
};
use tracing::debug;

use crate::domain::{
    Account, AccountError, AccountRepositoryInterface, AccountResult, AccountUpdate, NewAccount,
};
use crate::infrastructure::database::entities::account;

pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn account_model_to_domain(model: account::Model) -> Account {
    Account {
        id: model.id,
        email: model.email,
        first_name: model.first_name,
        last_name: model.last_name,
        password_hash: model.password,
        dummy: model.dummy,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn insert_err(e: DbErr, email: &str) -> AccountError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AccountError::Conflict(format!("account with email {} already exists", email))
        }
        _ => AccountError::Database(e),
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl AccountRepositoryInterface for AccountRepository {
    async fn find_by_email(&self, email: &str) -> AccountResult<Option<Account>> {
        let model = account::Entity::find()
            .filter(account::Column::Email.eq(email))
            .filter(account::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?;

        debug!(email, found = model.is_some(), "Account lookup");
        Ok(model.map(account_model_to_domain))
    }

    async fn insert_account(&self, new: NewAccount) -> AccountResult<Account> {
        let now = Utc::now();

        let row = account::ActiveModel {
            id: NotSet,
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            email: Set(new.email.clone()),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            password: Set(new.password_hash),
            dummy: Set(new.dummy),
        };

        let model = row
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, &new.email))?;

        Ok(account_model_to_domain(model))
    }

    async fn update_by_email(&self, update: AccountUpdate) -> AccountResult<()> {
        let result = account::Entity::update_many()
            .col_expr(account::Column::FirstName, Expr::value(update.first_name))
            .col_expr(account::Column::LastName, Expr::value(update.last_name))
            .col_expr(account::Column::Password, Expr::value(update.password_hash))
            .col_expr(account::Column::Dummy, Expr::value(false))
            .col_expr(account::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(account::Column::Email.eq(update.email.as_str()))
            .filter(account::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AccountError::NotFound {
                entity: "Account",
                field: "email",
                value: update.email,
            });
        }

        Ok(())
    }
}
