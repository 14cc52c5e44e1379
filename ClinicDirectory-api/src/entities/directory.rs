use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use clinic_directory_domain::models::{Patient, Provider};

/// Public representation of a patient row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientResponse {
    /// Patient identifier
    pub patient_id: i64,

    /// First name, `null` when not recorded
    pub first_name: Option<String>,

    /// Last name, `null` when not recorded
    pub last_name: Option<String>,

    /// Date of birth as `YYYY-MM-DD`, `null` when not recorded
    pub date_of_birth: Option<NaiveDate>,
}

/// Public representation of a provider row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderResponse {
    /// First name
    pub first_name: Option<String>,

    /// Last name
    pub last_name: Option<String>,

    /// Specialty, matched exactly by `/providers/filter`
    pub provider_specialty: Option<String>,
}

impl From<Patient> for PatientResponse {
    fn from(patient: Patient) -> Self {
        Self {
            patient_id: patient.patient_id,
            first_name: patient.first_name,
            last_name: patient.last_name,
            date_of_birth: patient.date_of_birth,
        }
    }
}

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        Self {
            first_name: provider.first_name,
            last_name: provider.last_name,
            provider_specialty: provider.provider_specialty,
        }
    }
}
