use serde::{Deserialize, Serialize};

/// One row of the `providers` table. No identifier column is read.
///
/// Every column is nullable; a NULL cell serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub provider_specialty: Option<String>,
}
