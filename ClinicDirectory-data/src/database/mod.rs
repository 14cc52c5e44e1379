use thiserror::Error;

// Database modules
pub mod connection;

// Seeded pools for tests
#[cfg(all(feature = "sqlite", any(test, feature = "mock")))]
pub mod testing;

// Re-export database connection types
pub use connection::*;

/// Database error enum
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Configuration error
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Unsupported database type
    #[error("Unsupported database type: {0}")]
    UnsupportedDatabaseType(String),

    /// MySQL driver error
    #[error("MySQL error: {0}")]
    MySqlError(#[from] sqlx::Error),

    /// SQLite connection pool error
    #[cfg(feature = "sqlite")]
    #[error("SQLite connection pool error: {0}")]
    SqlitePoolError(#[from] r2d2::Error),

    /// Blocking database task failed to complete
    #[error("Database task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}
