//! # Account Records
//!
//! User account model for a web application: validation, bcrypt password
//! hashing and persistence of accounts in a relational database.
//!
//! ## Architecture
//!
//! - **domain**: Account record, caller inputs, validation rules and the
//!   repository trait
//! - **application**: `AccountService`, which hashes before it persists
//! - **infrastructure**: SeaORM entity, migrations and repository; bcrypt
//! - **config**: TOML configuration
//! - **shared**: error types

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use application::AccountService;
pub use domain::{Account, CreateAccountDto, UpdateAccountDto, ValidationMode};
pub use shared::{AccountError, AccountResult};

// Re-export database types for easy access
pub use infrastructure::{init_database, AccountRepository, DatabaseConfig};
