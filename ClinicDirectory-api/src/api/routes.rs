use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

use crate::api::handlers::{self, SharedDirectoryService};
use crate::openapi::openapi_json;

/// Create the application router over an injected directory service
pub fn create_app(service: SharedDirectoryService) -> Router {
    debug!("Creating application router");

    let directory_routes = Router::new()
        .route("/patients", get(handlers::list_patients))
        .route("/patients/filter", get(handlers::filter_patients))
        .route("/providers", get(handlers::list_providers))
        .route("/providers/filter", get(handlers::filter_providers))
        .with_state(service);

    debug!("Directory routes configured");

    // Any origin, method and header may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(directory_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
