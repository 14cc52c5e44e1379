use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{info, instrument};

use super::SharedDirectoryService;
use crate::api::error::ApiError;
use crate::entities::common::PatientFilterParams;
use crate::entities::directory::PatientResponse;

/// List every patient
#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patients in database order", body = [PatientResponse]),
        (status = 500, description = "Database failure", body = String, content_type = "text/plain"),
    ),
    tag = "patients"
)]
#[instrument(skip_all)]
pub async fn list_patients(
    State(service): State<SharedDirectoryService>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    info!("Fetching all patients");

    let patients = service
        .list_patients()
        .await
        .map_err(|e| ApiError::from_service("Error fetching patients", e))?;

    Ok(Json(patients.into_iter().map(PatientResponse::from).collect()))
}

/// List the patients whose first name exactly equals `first_name`
#[utoipa::path(
    get,
    path = "/patients/filter",
    params(PatientFilterParams),
    responses(
        (status = 200, description = "Matching patients, possibly none", body = [PatientResponse]),
        (status = 400, description = "first_name missing or empty", body = String, content_type = "text/plain"),
        (status = 500, description = "Database failure or unusable query string", body = String, content_type = "text/plain"),
    ),
    tag = "patients"
)]
#[instrument(skip_all)]
pub async fn filter_patients(
    State(service): State<SharedDirectoryService>,
    params: Result<Query<PatientFilterParams>, QueryRejection>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::from_query_rejection("Error fetching patients", e))?;
    info!("Filtering patients by first name");

    let patients = service
        .filter_patients_by_first_name(params.first_name)
        .await
        .map_err(|e| ApiError::from_service("Error fetching patients", e))?;

    Ok(Json(patients.into_iter().map(PatientResponse::from).collect()))
}
