// ClinicDirectory Domain
// This crate contains the directory rules that sit between HTTP and SQL

// Services that implement the directory operations
pub mod services;

// Re-export the data layer modules for convenience
pub use clinic_directory_data::{database, models};

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
