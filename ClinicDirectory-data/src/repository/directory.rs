use async_trait::async_trait;
use tracing::debug;

use crate::database::DatabasePool;
use crate::models::{Patient, Provider};
use super::errors::RepositoryError;
use super::storage::DatabaseStorage;

/// Repository trait for the read-only directory queries
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DirectoryRepositoryTrait {
    /// Get every patient, in database order
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError>;

    /// Get every provider, in database order
    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError>;

    /// Get the patients whose first name exactly equals `first_name`
    async fn find_patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, RepositoryError>;

    /// Get the providers whose specialty exactly equals `specialty`
    async fn find_providers_by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, RepositoryError>;
}

/// Repository backed by an injected database pool
#[derive(Debug, Clone)]
pub struct DirectoryRepository {
    pool: DatabasePool,
}

impl DirectoryRepository {
    /// Create a new repository over `pool`
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryRepositoryTrait for DirectoryRepository {
    async fn list_patients(&self) -> Result<Vec<Patient>, RepositoryError> {
        debug!("Getting all patients from database");
        DatabaseStorage::query_patients(&self.pool, None).await
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, RepositoryError> {
        debug!("Getting all providers from database");
        DatabaseStorage::query_providers(&self.pool, None).await
    }

    async fn find_patients_by_first_name(&self, first_name: &str) -> Result<Vec<Patient>, RepositoryError> {
        debug!("Getting patients by first name from database");
        DatabaseStorage::query_patients(&self.pool, Some(first_name)).await
    }

    async fn find_providers_by_specialty(&self, specialty: &str) -> Result<Vec<Provider>, RepositoryError> {
        debug!("Getting providers by specialty from database");
        DatabaseStorage::query_providers(&self.pool, Some(specialty)).await
    }
}
