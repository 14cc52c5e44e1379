use std::sync::Arc;

use clinic_directory_data::database::DatabasePool;
use clinic_directory_domain::services::{create_directory_service, DirectoryServiceTrait};

pub mod root;
pub mod patients;
pub mod providers;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use patients::{filter_patients, list_patients};
pub use providers::{filter_providers, list_providers};
pub use root::welcome;

/// Service type for dependency injection
pub type SharedDirectoryService = Arc<dyn DirectoryServiceTrait + Send + Sync>;

/// Create the directory service the handlers run against
pub fn create_service(pool: DatabasePool) -> SharedDirectoryService {
    Arc::new(create_directory_service(pool))
}
