use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{info, instrument};

use super::SharedDirectoryService;
use crate::api::error::ApiError;
use crate::entities::common::ProviderFilterParams;
use crate::entities::directory::ProviderResponse;

#[utoipa::path(
    get,
    path = "/providers",
    responses(
        (status = 200, description = "All providers in database order", body = [ProviderResponse]),
        (status = 500, description = "Database failure", body = String, content_type = "text/plain"),
    ),
    tag = "providers"
)]
#[instrument(skip_all)]
pub async fn list_providers(
    State(service): State<SharedDirectoryService>,
) -> Result<Json<Vec<ProviderResponse>>, ApiError> {
    info!("Fetching all providers");

    let providers = service
        .list_providers()
        .await
        .map_err(|e| ApiError::from_service("Error fetching providers", e))?;

    Ok(Json(providers.into_iter().map(ProviderResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/providers/filter",
    params(ProviderFilterParams),
    responses(
        (status = 200, description = "Providers with this exact specialty, possibly none", body = [ProviderResponse]),
        (status = 400, description = "specialty missing or empty", body = String, content_type = "text/plain"),
        (status = 500, description = "Database failure or unusable query string", body = String, content_type = "text/plain"),
    ),
    tag = "providers"
)]
#[instrument(skip_all)]
pub async fn filter_providers(
    State(service): State<SharedDirectoryService>,
    params: Result<Query<ProviderFilterParams>, QueryRejection>,
) -> Result<Json<Vec<ProviderResponse>>, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::from_query_rejection("Error fetching providers", e))?;
    info!("Filtering providers by specialty");

    let providers = service
        .filter_providers_by_specialty(params.specialty)
        .await
        .map_err(|e| ApiError::from_service("Error fetching providers", e))?;

    Ok(Json(providers.into_iter().map(ProviderResponse::from).collect()))
}
