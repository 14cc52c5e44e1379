use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use chrono::NaiveDate;
use tower::ServiceExt;

use clinic_directory_domain::models::{Patient, Provider};
use clinic_directory_domain::testing::MockDirectoryService;

use crate::api::routes::create_app;

mod providers_test;

/// Build the full router over a mock, keeping a handle for call assertions
pub(crate) fn app_with(mock: MockDirectoryService) -> (Router, Arc<MockDirectoryService>) {
    let mock = Arc::new(mock);
    (create_app(mock.clone()), mock)
}

pub(crate) async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub(crate) async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub(crate) fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

pub(crate) fn assert_status(response: &Response, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}

pub(crate) fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            patient_id: 1,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10),
        },
        Patient {
            patient_id: 2,
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            date_of_birth: None,
        },
        Patient {
            patient_id: 3,
            first_name: Some("Ada".to_string()),
            last_name: Some("Byron".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(2001, 7, 4),
        },
    ]
}

pub(crate) fn sample_providers() -> Vec<Provider> {
    vec![
        Provider {
            first_name: Some("Gregory".to_string()),
            last_name: Some("House".to_string()),
            provider_specialty: Some("Diagnostics".to_string()),
        },
        Provider {
            first_name: Some("Meredith".to_string()),
            last_name: Some("Grey".to_string()),
            provider_specialty: Some("Surgery".to_string()),
        },
    ]
}
