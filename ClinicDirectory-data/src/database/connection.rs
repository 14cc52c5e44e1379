//! Database connection module for the ClinicDirectory API
//!
//! The pool is configured from the `DB_*` environment variables and supports:
//! - MySQL (default), through an async `sqlx` pool
//! - SQLite (optional, `sqlite` feature), through an `r2d2` pool
//!
//! Building a pool never dials the server. Connectivity is probed separately
//! with [`DatabasePool::check_connection`], so an unreachable database only
//! surfaces once a query is attempted.

use std::env;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "sqlite")]
use std::sync::Arc;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};

use super::DatabaseError;

/// Default maximum number of pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default time to wait for a pooled connection, in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "sqlite")]
const DEFAULT_SQLITE_PATH: &str = "data/clinic_directory.db";

/// Blocking SQLite connection pool
#[cfg(feature = "sqlite")]
pub type SqlitePool = r2d2::Pool<r2d2_sqlite::SqliteConnectionManager>;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// MySQL server
    MySql,
    /// SQLite database (file-based)
    #[cfg(feature = "sqlite")]
    Sqlite,
}

impl FromStr for DatabaseType {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::MySql),
            #[cfg(feature = "sqlite")]
            "sqlite" => Ok(DatabaseType::Sqlite),
            _ => Err(DatabaseError::UnsupportedDatabaseType(s.to_string())),
        }
    }
}

/// Database configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Database type (mysql, sqlite)
    pub db_type: DatabaseType,
    /// Server host (`DB_HOST`)
    pub host: Option<String>,
    /// Login user (`DB_USER`)
    pub user: Option<String>,
    /// Login password (`DB_PASS`)
    pub password: Option<String>,
    /// Schema name (`DB_NAME`)
    pub database: Option<String>,
    /// Server port (`DB_PORT`)
    pub port: Option<u16>,
    /// Path to SQLite database file
    pub sqlite_path: Option<String>,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Connection acquire timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DatabaseType::MySql,
            host: None,
            user: None,
            password: None,
            database: None,
            port: None,
            sqlite_path: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("db_type", &self.db_type)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("port", &self.port)
            .field("sqlite_path", &self.sqlite_path)
            .field("max_connections", &self.max_connections)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration from environment variables
    pub fn from_env() -> Result<Self, DatabaseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Unset connection variables stay `None` and are left to the driver's
    /// defaults. Only an unknown `DB_TYPE` is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DatabaseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let db_type = match var("DB_TYPE") {
            Some(value) => value.parse()?,
            None => DatabaseType::MySql,
        };

        let port = match var("DB_PORT") {
            Some(value) => match value.trim().parse::<u16>() {
                Ok(port) => Some(port),
                Err(e) => {
                    warn!("Ignoring invalid DB_PORT value {:?}: {}", value, e);
                    None
                }
            },
            None => None,
        };

        let max_connections = var("DB_MAX_CONNECTIONS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let timeout_seconds = var("DB_TIMEOUT_SECONDS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(DatabaseConfig {
            db_type,
            host: var("DB_HOST"),
            user: var("DB_USER"),
            password: var("DB_PASS"),
            database: var("DB_NAME"),
            port,
            sqlite_path: var("DB_SQLITE_PATH"),
            max_connections,
            timeout_seconds,
        })
    }

    /// MySQL connection options; unset fields keep the driver defaults
    pub fn mysql_connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new();

        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }

        options
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Database connection pool enum for different database types
#[derive(Debug, Clone)]
pub enum DatabasePool {
    /// MySQL connection pool
    MySql(MySqlPool),

    /// SQLite connection pool
    #[cfg(feature = "sqlite")]
    Sqlite(Arc<SqlitePool>),
}

impl DatabasePool {
    /// Build the pool described by `config` without opening any connection.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        info!(
            "Initializing database pool with type: {:?} (max_connections={}, timeout={}s)",
            config.db_type, config.max_connections, config.timeout_seconds
        );

        match config.db_type {
            DatabaseType::MySql => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.timeout())
                    .connect_lazy_with(config.mysql_connect_options());
                DatabasePool::MySql(pool)
            }
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => {
                let path = config
                    .sqlite_path
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string());
                info!("Using SQLite database at: {}", path);

                let manager = r2d2_sqlite::SqliteConnectionManager::file(&path);
                Self::from_sqlite_manager(manager, config.max_connections, config.timeout())
            }
        }
    }

    /// Wrap an SQLite connection manager in a pool that connects on demand
    #[cfg(feature = "sqlite")]
    pub fn from_sqlite_manager(
        manager: r2d2_sqlite::SqliteConnectionManager,
        max_connections: u32,
        timeout: Duration,
    ) -> Self {
        let pool = r2d2::Pool::builder()
            .max_size(max_connections)
            .connection_timeout(timeout)
            .build_unchecked(manager);

        DatabasePool::Sqlite(Arc::new(pool))
    }

    /// Acquire one connection and hand it straight back to the pool
    pub async fn check_connection(&self) -> Result<(), DatabaseError> {
        match self {
            DatabasePool::MySql(pool) => {
                pool.acquire().await?;
                Ok(())
            }
            #[cfg(feature = "sqlite")]
            DatabasePool::Sqlite(pool) => {
                let pool = Arc::clone(pool);
                tokio::task::spawn_blocking(move || pool.get().map(drop)).await??;
                Ok(())
            }
        }
    }

    /// Backend this pool talks to
    pub fn database_type(&self) -> DatabaseType {
        match self {
            DatabasePool::MySql(_) => DatabaseType::MySql,
            #[cfg(feature = "sqlite")]
            DatabasePool::Sqlite(_) => DatabaseType::Sqlite,
        }
    }
}
