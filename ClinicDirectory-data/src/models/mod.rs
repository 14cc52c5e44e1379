// Row models for the directory tables
pub mod patient;
pub mod provider;

pub use patient::Patient;
pub use provider::Provider;
