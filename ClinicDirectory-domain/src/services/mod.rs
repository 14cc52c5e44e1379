pub mod directory;

// Domain services
// This module contains the directory operations behind the HTTP handlers.

// Re-export service traits and factory functions
pub use directory::{
    create_directory_service, DirectoryService, DirectoryServiceError, DirectoryServiceTrait,
    FIRST_NAME_REQUIRED, SPECIALTY_REQUIRED,
};
