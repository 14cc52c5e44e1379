use chrono::{NaiveDate, NaiveDateTime};
use sqlx::mysql::MySqlRow;
use sqlx::Row;
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::{Patient, Provider};
use super::errors::RepositoryError;

const SELECT_PATIENTS: &str =
    "SELECT patient_id, first_name, last_name, date_of_birth FROM patients";

const SELECT_PATIENTS_BY_FIRST_NAME: &str =
    "SELECT patient_id, first_name, last_name, date_of_birth FROM patients WHERE first_name = ?";

const SELECT_PROVIDERS: &str =
    "SELECT first_name, last_name, provider_specialty FROM providers";

const SELECT_PROVIDERS_BY_SPECIALTY: &str =
    "SELECT first_name, last_name, provider_specialty FROM providers WHERE provider_specialty = ?";

/// Database storage operations for the directory tables.
///
/// Every statement is a fixed literal; filter values travel as bound
/// parameters and never become part of the SQL text.
pub struct DatabaseStorage;

impl DatabaseStorage {
    /// Run a patients statement with zero or one bound parameter
    pub async fn query_patients(
        pool: &DatabasePool,
        first_name: Option<&str>,
    ) -> Result<Vec<Patient>, RepositoryError> {
        let sql = match first_name {
            Some(_) => SELECT_PATIENTS_BY_FIRST_NAME,
            None => SELECT_PATIENTS,
        };
        debug!("Querying patients: {}", sql);

        match pool {
            DatabasePool::MySql(pool) => {
                let mut query = sqlx::query(sql);
                if let Some(value) = first_name {
                    query = query.bind(value);
                }

                let rows = query.fetch_all(pool).await?;
                rows.iter()
                    .map(patient_from_mysql_row)
                    .collect::<Result<Vec<_>, _>>()
            }

            #[cfg(feature = "sqlite")]
            DatabasePool::Sqlite(pool) => {
                let pool = std::sync::Arc::clone(pool);
                let params: Vec<String> = first_name.map(str::to_string).into_iter().collect();

                tokio::task::spawn_blocking(move || sqlite::query_patients(&pool, sql, &params)).await?
            }
        }
    }

    /// Run a providers statement with zero or one bound parameter
    pub async fn query_providers(
        pool: &DatabasePool,
        specialty: Option<&str>,
    ) -> Result<Vec<Provider>, RepositoryError> {
        let sql = match specialty {
            Some(_) => SELECT_PROVIDERS_BY_SPECIALTY,
            None => SELECT_PROVIDERS,
        };
        debug!("Querying providers: {}", sql);

        match pool {
            DatabasePool::MySql(pool) => {
                let mut query = sqlx::query(sql);
                if let Some(value) = specialty {
                    query = query.bind(value);
                }

                let rows = query.fetch_all(pool).await?;
                rows.iter()
                    .map(provider_from_mysql_row)
                    .collect::<Result<Vec<_>, _>>()
            }

            #[cfg(feature = "sqlite")]
            DatabasePool::Sqlite(pool) => {
                let pool = std::sync::Arc::clone(pool);
                let params: Vec<String> = specialty.map(str::to_string).into_iter().collect();

                tokio::task::spawn_blocking(move || sqlite::query_providers(&pool, sql, &params)).await?
            }
        }
    }
}

fn patient_from_mysql_row(row: &MySqlRow) -> Result<Patient, RepositoryError> {
    Ok(Patient {
        patient_id: mysql_id(row, "patient_id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        date_of_birth: mysql_date(row, "date_of_birth")?,
    })
}

fn provider_from_mysql_row(row: &MySqlRow) -> Result<Provider, RepositoryError> {
    Ok(Provider {
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        provider_specialty: row.try_get("provider_specialty")?,
    })
}

// Signed or UNSIGNED integer id; unsigned values above i64::MAX are rejected
fn mysql_id(row: &MySqlRow, column: &str) -> Result<i64, RepositoryError> {
    match row.try_get::<i64, _>(column) {
        Ok(id) => Ok(id),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let id: u64 = row.try_get(column)?;
            i64::try_from(id)
                .map_err(|_| RepositoryError::Decode(format!("{} {} is out of range", column, id)))
        }
        Err(e) => Err(e.into()),
    }
}

// DATE, or DATETIME / TIMESTAMP truncated to the day
fn mysql_date(row: &MySqlRow, column: &str) -> Result<Option<NaiveDate>, RepositoryError> {
    match row.try_get::<Option<NaiveDate>, _>(column) {
        Ok(date) => Ok(date),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let timestamp: Option<NaiveDateTime> = row.try_get(column)?;
            Ok(timestamp.map(|value| value.date()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Blocking SQLite side, always run on the blocking thread pool
#[cfg(feature = "sqlite")]
mod sqlite {
    use chrono::NaiveDate;

    use crate::database::SqlitePool;
    use crate::models::{Patient, Provider};
    use super::RepositoryError;

    pub(super) fn query_patients(
        pool: &SqlitePool,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<Patient>, RepositoryError> {
        let conn = pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })?;

        let mut patients = Vec::new();
        for row in rows {
            let (patient_id, first_name, last_name, date_of_birth) = row?;
            patients.push(Patient {
                patient_id,
                first_name,
                last_name,
                date_of_birth: date_of_birth.as_deref().map(parse_date).transpose()?,
            });
        }

        Ok(patients)
    }

    pub(super) fn query_providers(
        pool: &SqlitePool,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<Provider>, RepositoryError> {
        let conn = pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        let rows = stmt.query_map(rusqlite::params_from_iter(params.iter()), |row| {
            Ok(Provider {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                provider_specialty: row.get(2)?,
            })
        })?;

        let mut providers = Vec::new();
        for provider in rows {
            providers.push(provider?);
        }

        Ok(providers)
    }

    // SQLite has no DATE type. Dates are ISO-8601 text, optionally followed by a time.
    pub(super) fn parse_date(value: &str) -> Result<NaiveDate, RepositoryError> {
        let day = value.get(..10).unwrap_or(value);
        NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .map_err(|e| RepositoryError::Decode(format!("invalid date_of_birth {:?}: {}", value, e)))
    }
}
