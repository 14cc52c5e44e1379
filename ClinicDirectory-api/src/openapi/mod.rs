use axum::Json;
use utoipa::OpenApi;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::root::welcome,

        // Patient endpoints
        crate::api::handlers::patients::list_patients,
        crate::api::handlers::patients::filter_patients,

        // Provider endpoints
        crate::api::handlers::providers::list_providers,
        crate::api::handlers::providers::filter_providers,
    ),
    components(
        schemas(
            crate::entities::directory::PatientResponse,
            crate::entities::directory::ProviderResponse,
        )
    ),
    tags(
        (name = "root", description = "Welcome endpoint"),
        (name = "patients", description = "Patient directory endpoints"),
        (name = "providers", description = "Provider directory endpoints")
    ),
    info(
        title = "Clinic Directory API",
        version = "0.1.0",
        description = "Read-only listing and exact-match filtering of clinic patients and providers",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "Clinic Directory API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags are defined");
        assert!(tags.iter().any(|tag| tag.name == "patients"));
        assert!(tags.iter().any(|tag| tag.name == "providers"));

        for path in ["/", "/patients", "/patients/filter", "/providers", "/providers/filter"] {
            assert!(
                openapi.paths.paths.contains_key(path),
                "missing path {path}"
            );
        }
    }

    #[test]
    fn test_filter_parameters_are_documented() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let patient_params = &json["paths"]["/patients/filter"]["get"]["parameters"];
        assert_eq!(patient_params[0]["name"], "first_name");
        assert_eq!(patient_params[0]["in"], "query");

        let provider_params = &json["paths"]["/providers/filter"]["get"]["parameters"];
        assert_eq!(provider_params[0]["name"], "specialty");
    }

    #[test]
    fn test_response_schemas_registered() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().expect("components").schemas;

        assert!(schemas.contains_key("PatientResponse"));
        assert!(schemas.contains_key("ProviderResponse"));
    }
}
