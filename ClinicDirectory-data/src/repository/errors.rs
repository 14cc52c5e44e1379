use thiserror::Error;
use crate::database::DatabaseError;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// MySQL query error
    #[error("MySQL error: {0}")]
    MySql(#[from] sqlx::Error),

    /// SQLite error
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error
    #[cfg(feature = "sqlite")]
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Blocking query task failed
    #[error("Query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// A column value could not be converted into the row model
    #[error("Row decoding error: {0}")]
    Decode(String),
}
