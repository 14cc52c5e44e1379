use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for `/patients/filter`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PatientFilterParams {
    /// Exact first name to match (required, non-empty)
    pub first_name: Option<String>,
}

/// Query parameters for `/providers/filter`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProviderFilterParams {
    /// Exact specialty to match (required, non-empty)
    pub specialty: Option<String>,
}
