use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use clinic_directory_data::database::DatabasePool;
use clinic_directory_data::models::{Patient, Provider};
use clinic_directory_data::repository::{DirectoryRepository, DirectoryRepositoryTrait, RepositoryError};

/// Rejection text when `first_name` is missing from a patient filter
pub const FIRST_NAME_REQUIRED: &str = "First name query parameter is required.";

/// Rejection text when `specialty` is missing from a provider filter
pub const SPECIALTY_REQUIRED: &str = "Specialty query parameter is required.";

/// Directory service errors
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// A required filter value was absent or empty
    #[error("{0}")]
    MissingParameter(&'static str),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// Trait for directory service operations
#[async_trait]
pub trait DirectoryServiceTrait {
    /// Get all patients
    async fn list_patients(&self) -> Result<Vec<Patient>, DirectoryServiceError>;

    /// Get all providers
    async fn list_providers(&self) -> Result<Vec<Provider>, DirectoryServiceError>;

    /// Get patients by exact first name.
    ///
    /// `None` and `Some("")` are rejected before the repository is touched.
    async fn filter_patients_by_first_name(
        &self,
        first_name: Option<String>,
    ) -> Result<Vec<Patient>, DirectoryServiceError>;

    /// Get providers by exact specialty, with the same presence rule
    async fn filter_providers_by_specialty(
        &self,
        specialty: Option<String>,
    ) -> Result<Vec<Provider>, DirectoryServiceError>;
}

/// Directory service for domain logic
pub struct DirectoryService<R: DirectoryRepositoryTrait> {
    repository: R,
}

impl<R: DirectoryRepositoryTrait> DirectoryService<R> {
    /// Create a new directory service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

/// Accept a filter value only when it is present and non-empty
fn require_filter(value: Option<String>, message: &'static str) -> Result<String, DirectoryServiceError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DirectoryServiceError::MissingParameter(message)),
    }
}

#[async_trait]
impl<R: DirectoryRepositoryTrait + Send + Sync> DirectoryServiceTrait for DirectoryService<R> {
    async fn list_patients(&self) -> Result<Vec<Patient>, DirectoryServiceError> {
        Ok(self.repository.list_patients().await?)
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, DirectoryServiceError> {
        Ok(self.repository.list_providers().await?)
    }

    async fn filter_patients_by_first_name(
        &self,
        first_name: Option<String>,
    ) -> Result<Vec<Patient>, DirectoryServiceError> {
        let first_name = require_filter(first_name, FIRST_NAME_REQUIRED)?;
        debug!("Filtering patients by first name");

        Ok(self.repository.find_patients_by_first_name(&first_name).await?)
    }

    async fn filter_providers_by_specialty(
        &self,
        specialty: Option<String>,
    ) -> Result<Vec<Provider>, DirectoryServiceError> {
        let specialty = require_filter(specialty, SPECIALTY_REQUIRED)?;
        debug!("Filtering providers by specialty");

        Ok(self.repository.find_providers_by_specialty(&specialty).await?)
    }
}

/// Create a directory service over the given pool
pub fn create_directory_service(pool: DatabasePool) -> impl DirectoryServiceTrait + Send + Sync {
    DirectoryService::new(DirectoryRepository::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_directory_data::database::DatabaseError;
    use clinic_directory_data::repository::MockDirectoryRepositoryTrait;

    fn patient(id: i64, first_name: &str) -> Patient {
        Patient {
            patient_id: id,
            first_name: Some(first_name.to_string()),
            last_name: Some("Tester".to_string()),
            date_of_birth: None,
        }
    }

    fn outage() -> RepositoryError {
        RepositoryError::Database(DatabaseError::ConfigError("connection refused".to_string()))
    }

    #[tokio::test]
    async fn test_missing_first_name_never_reaches_repository() {
        let mut repo = MockDirectoryRepositoryTrait::new();
        repo.expect_find_patients_by_first_name().times(0);
        let service = DirectoryService::new(repo);

        for value in [None, Some(String::new())] {
            let result = service.filter_patients_by_first_name(value).await;
            match result {
                Err(DirectoryServiceError::MissingParameter(message)) => {
                    assert_eq!(message, "First name query parameter is required.");
                }
                other => panic!("expected MissingParameter, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_missing_specialty_never_reaches_repository() {
        let mut repo = MockDirectoryRepositoryTrait::new();
        repo.expect_find_providers_by_specialty().times(0);
        let service = DirectoryService::new(repo);

        let result = service.filter_providers_by_specialty(Some(String::new())).await;
        assert!(matches!(
            result,
            Err(DirectoryServiceError::MissingParameter(SPECIALTY_REQUIRED))
        ));
    }

    #[tokio::test]
    async fn test_first_name_is_passed_through_unchanged() {
        let mut repo = MockDirectoryRepositoryTrait::new();
        repo.expect_find_patients_by_first_name()
            .withf(|first_name: &str| first_name == " Ada ")
            .times(1)
            .returning(|_| Ok(vec![patient(1, " Ada ")]));
        let service = DirectoryService::new(repo);

        let patients = service
            .filter_patients_by_first_name(Some(" Ada ".to_string()))
            .await
            .unwrap();
        assert_eq!(patients, vec![patient(1, " Ada ")]);
    }

    #[tokio::test]
    async fn test_empty_match_is_not_an_error() {
        let mut repo = MockDirectoryRepositoryTrait::new();
        repo.expect_find_providers_by_specialty()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let service = DirectoryService::new(repo);

        let providers = service
            .filter_providers_by_specialty(Some("Podiatry".to_string()))
            .await
            .unwrap();
        assert!(providers.is_empty());
    }

    #[tokio::test]
    async fn test_repository_failure_is_wrapped() {
        let mut repo = MockDirectoryRepositoryTrait::new();
        repo.expect_list_patients().times(1).returning(|| Err(outage()));
        repo.expect_list_providers().times(1).returning(|| Err(outage()));
        let service = DirectoryService::new(repo);

        assert!(matches!(
            service.list_patients().await,
            Err(DirectoryServiceError::RepositoryError(_))
        ));
        assert!(matches!(
            service.list_providers().await,
            Err(DirectoryServiceError::RepositoryError(_))
        ));
    }
}
