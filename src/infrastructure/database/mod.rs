pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::AccountRepository;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::AppConfig;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./accounts.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./accounts.db?mode=rwc".to_string(),
        }
    }
}

impl From<&AppConfig> for DatabaseConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database.connection_url(),
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory SQLite database, gone when the connection closes.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
        }
    }

    /// URL safe to log: the user-info part (`user:password@`) is masked.
    pub fn redacted_url(&self) -> String {
        let Some(scheme_end) = self.url.find("://") else {
            return self.url.clone();
        };
        let (scheme, rest) = self.url.split_at(scheme_end + 3);
        let authority = &rest[..rest.find(['/', '?']).unwrap_or(rest.len())];
        match authority.rfind('@') {
            Some(at) => format!("{}***{}", scheme, &rest[at..]),
            None => self.url.clone(),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.redacted_url());

    let mut options = ConnectOptions::new(config.url.clone());
    options.sqlx_logging(false);
    if config.is_in_memory() {
        // Each pooled connection would otherwise see its own empty database
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
