// SQLite pools for exercising the directory queries without a MySQL server

use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

use super::DatabasePool;

/// Schema and rows loaded into every seeded connection.
///
/// Both tables carry a column the queries never select.
pub const SEED_SQL: &str = "
    CREATE TABLE patients (
        patient_id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        date_of_birth TEXT,
        gender TEXT
    );
    INSERT INTO patients (patient_id, first_name, last_name, date_of_birth, gender) VALUES
        (1, 'Ada', 'Lovelace', '1990-12-10', 'F'),
        (2, 'Grace', 'Hopper', '1985-12-09', 'F'),
        (3, 'Ada', 'Byron', '2001-07-04', 'F'),
        (4, 'ada', 'Lowercase', NULL, 'U');

    CREATE TABLE providers (
        provider_id INTEGER PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        provider_specialty TEXT NOT NULL,
        email_address TEXT
    );
    INSERT INTO providers (provider_id, first_name, last_name, provider_specialty, email_address) VALUES
        (1, 'Gregory', 'House', 'Diagnostics', 'house@example.org'),
        (2, 'Meredith', 'Grey', 'Surgery', 'grey@example.org'),
        (3, 'Derek', 'Shepherd', 'Surgery', 'shepherd@example.org');
";

/// Number of rows in the seeded `patients` table
pub const SEEDED_PATIENT_COUNT: usize = 4;

/// Number of rows in the seeded `providers` table
pub const SEEDED_PROVIDER_COUNT: usize = 3;

/// In-memory SQLite pool holding the [`SEED_SQL`] fixtures.
///
/// Capped at one connection: every in-memory connection is its own database.
pub fn seeded_sqlite_pool() -> DatabasePool {
    sqlite_pool_from(SEED_SQL)
}

/// In-memory SQLite pool whose single connection is initialised with `sql`
pub fn sqlite_pool_from(sql: &'static str) -> DatabasePool {
    let manager = SqliteConnectionManager::memory().with_init(move |conn| conn.execute_batch(sql));
    DatabasePool::from_sqlite_manager(manager, 1, Duration::from_secs(5))
}

/// Pool whose connections always fail to open, simulating a database outage
pub fn unreachable_sqlite_pool() -> DatabasePool {
    let manager = SqliteConnectionManager::file("/nonexistent/clinic-directory/outage.db")
        .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE);
    DatabasePool::from_sqlite_manager(manager, 1, Duration::from_millis(250))
}
