// ClinicDirectory Data
// This crate handles database connectivity and the fixed directory queries

// Database connection management
pub mod database;

// Repository implementations for data access
pub mod repository;

// Row models returned by the directory queries
pub mod models;
