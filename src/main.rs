//! Account Records CLI
//!
//! Manage user accounts stored in the configured database.
//! Reads configuration from TOML file (~/.config/account-records/config.toml).
//!
//! ```sh
//! account-records register --first-name Ada --last-name Lovelace \
//!     --email ada@example.com --password 'secret'
//! account-records login --email ada@example.com --password 'secret'
//! account-records show --email ada@example.com
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use account_records::config::{LogFormat, LoggingSection};
use account_records::infrastructure::database::migrator::Migrator;
use account_records::{
    default_config_path, init_database, AccountRepository, AccountService,
    AppConfig, CreateAccountDto, DatabaseConfig, UpdateAccountDto, ValidationMode,
};

/// Register, authenticate and update user accounts.
#[derive(Parser, Debug)]
#[command(name = "account-records", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ACCOUNTS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new account.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Check an email/password pair.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Replace names and password of an existing account.
    Update {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        password: String,
    },
    /// Print an account as JSON.
    Show {
        #[arg(long)]
        email: String,
    },
}

fn init_tracing(logging: &LoggingSection) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let (mut app_cfg, load_err) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(ref level) = cli.log_level {
        app_cfg.logging.level = level.clone();
    }
    init_tracing(&app_cfg.logging);
    match load_err {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig::from(&app_cfg);
    let db = init_database(&db_config).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e
    })?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;

    let service = AccountService::with_hash_cost(
        Arc::new(AccountRepository::new(db.clone())),
        app_cfg.security.bcrypt_cost,
    );

    let result = run(&service, cli.command).await;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    }

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(
    service: &AccountService<AccountRepository>,
    command: Command,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let account = service
                .register(CreateAccountDto::new(first_name, last_name, email, password))
                .await?;
            println!("Registered account {} ({})", account.id, account.email);
        }
        Command::Login { email, password } => {
            let credentials = CreateAccountDto {
                email,
                password,
                ..Default::default()
            };
            credentials.validate(ValidationMode::Login)?;
            let account = service
                .authenticate(&credentials.email, &credentials.password)
                .await?;
            println!("Welcome back, {} {}", account.first_name, account.last_name);
        }
        Command::Update {
            email,
            first_name,
            last_name,
            password,
        } => {
            let dto = UpdateAccountDto {
                email,
                first_name,
                last_name,
                password,
            };
            dto.validate()?;
            let email = dto.email.clone();
            service.update(dto).await?;
            println!("Updated account {}", email);
        }
        Command::Show { email } => match service.fetch_by_email(&email).await? {
            Some(account) => {
                println!("{}", serde_json::to_string_pretty(&account)?);
            }
            None => println!("No account with email {}", email),
        },
    }
    Ok(())
}
