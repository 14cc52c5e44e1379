// Public entities for the ClinicDirectory API
// Response bodies exposed across the HTTP boundary

// Patient and provider rows
pub mod directory;

// Query string parameters
pub mod common;
