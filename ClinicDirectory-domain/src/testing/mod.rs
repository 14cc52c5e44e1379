// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::models::{Patient, Provider};
use crate::services::directory::{
    DirectoryServiceError, DirectoryServiceTrait, FIRST_NAME_REQUIRED, SPECIALTY_REQUIRED,
};
use clinic_directory_data::database::DatabaseError;
use clinic_directory_data::repository::RepositoryError;

/// Mock implementation of the DirectoryServiceTrait for testing.
///
/// Applies the same presence rule as the real service and filters its
/// fixtures by exact equality. `data_source_calls` counts every operation
/// that would have reached the database.
pub struct MockDirectoryService {
    patients: Vec<Patient>,
    providers: Vec<Provider>,
    should_fail: bool,
    data_source_calls: AtomicUsize,
}

impl Default for MockDirectoryService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDirectoryService {
    /// Create a new, empty mock directory service
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
            providers: Vec::new(),
            should_fail: false,
            data_source_calls: AtomicUsize::new(0),
        }
    }

    /// Add pre-defined patients to the mock
    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients.extend(patients);
        self
    }

    /// Add pre-defined providers to the mock
    pub fn with_providers(mut self, providers: Vec<Provider>) -> Self {
        self.providers.extend(providers);
        self
    }

    /// Configure the mock to fail every data source call
    pub fn with_database_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of operations that reached the (mock) data source
    pub fn data_source_calls(&self) -> usize {
        self.data_source_calls.load(Ordering::SeqCst)
    }

    fn touch_data_source(&self) -> Result<(), DirectoryServiceError> {
        self.data_source_calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            Err(DirectoryServiceError::RepositoryError(RepositoryError::Database(
                DatabaseError::ConfigError("mock is configured to fail".to_string()),
            )))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DirectoryServiceTrait for MockDirectoryService {
    async fn list_patients(&self) -> Result<Vec<Patient>, DirectoryServiceError> {
        self.touch_data_source()?;
        Ok(self.patients.clone())
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, DirectoryServiceError> {
        self.touch_data_source()?;
        Ok(self.providers.clone())
    }

    async fn filter_patients_by_first_name(
        &self,
        first_name: Option<String>,
    ) -> Result<Vec<Patient>, DirectoryServiceError> {
        let first_name = first_name
            .filter(|value| !value.is_empty())
            .ok_or(DirectoryServiceError::MissingParameter(FIRST_NAME_REQUIRED))?;

        self.touch_data_source()?;
        Ok(self
            .patients
            .iter()
            .filter(|patient| patient.first_name.as_deref() == Some(first_name.as_str()))
            .cloned()
            .collect())
    }

    async fn filter_providers_by_specialty(
        &self,
        specialty: Option<String>,
    ) -> Result<Vec<Provider>, DirectoryServiceError> {
        let specialty = specialty
            .filter(|value| !value.is_empty())
            .ok_or(DirectoryServiceError::MissingParameter(SPECIALTY_REQUIRED))?;

        self.touch_data_source()?;
        Ok(self
            .providers
            .iter()
            .filter(|provider| provider.provider_specialty.as_deref() == Some(specialty.as_str()))
            .cloned()
            .collect())
    }
}
