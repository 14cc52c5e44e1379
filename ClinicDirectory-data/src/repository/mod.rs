// Repository module structure
pub mod errors;
mod directory;
mod storage;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use directory::{DirectoryRepository, DirectoryRepositoryTrait};
pub use storage::DatabaseStorage;

// Re-export the generated mock when the mock feature is enabled
#[cfg(feature = "mock")]
pub use directory::MockDirectoryRepositoryTrait;
