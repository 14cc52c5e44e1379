use axum::http::StatusCode;

use super::{app_with, assert_status, body_json, body_string, get, sample_providers};
use clinic_directory_domain::models::Provider;
use clinic_directory_domain::testing::MockDirectoryService;

#[tokio::test]
async fn test_list_providers_returns_three_fields() {
    let (app, _) = app_with(MockDirectoryService::new().with_providers(sample_providers()));

    let response = get(app, "/providers").await;

    assert_status(&response, StatusCode::OK);
    let body = body_json(response).await;
    let providers = body.as_array().unwrap();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[0].as_object().unwrap().len(), 3);
    assert_eq!(providers[0]["last_name"], "House");
    assert_eq!(providers[1]["provider_specialty"], "Surgery");
}

#[tokio::test]
async fn test_list_providers_database_failure() {
    let (app, _) = app_with(MockDirectoryService::new().with_database_failure());

    let response = get(app, "/providers").await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Server Error");
}

#[tokio::test]
async fn test_filter_providers_by_specialty() {
    let (app, _) = app_with(MockDirectoryService::new().with_providers(sample_providers()));

    let response = get(app, "/providers/filter?specialty=Surgery").await;

    assert_status(&response, StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["first_name"], "Meredith");
}

#[tokio::test]
async fn test_filter_providers_is_case_sensitive() {
    let (app, _) = app_with(MockDirectoryService::new().with_providers(sample_providers()));

    let response = get(app, "/providers/filter?specialty=surgery").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn test_filter_providers_missing_parameter() {
    let (app, mock) = app_with(MockDirectoryService::new().with_providers(sample_providers()));

    let response = get(app, "/providers/filter?first_name=Gregory").await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(
        body_string(response).await,
        "Specialty query parameter is required."
    );
    assert_eq!(mock.data_source_calls(), 0);
}

#[tokio::test]
async fn test_filter_providers_empty_parameter() {
    let (app, mock) = app_with(MockDirectoryService::new());

    let response = get(app, "/providers/filter?specialty=").await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(mock.data_source_calls(), 0);
}

#[tokio::test]
async fn test_filter_providers_database_failure() {
    let (app, _) = app_with(MockDirectoryService::new().with_database_failure());

    let response = get(app, "/providers/filter?specialty=Surgery").await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Server Error");
}

#[tokio::test]
async fn test_list_providers_keeps_rows_with_null_columns() {
    let mut providers = sample_providers();
    providers.push(Provider {
        first_name: Some("New".to_string()),
        last_name: Some("Hire".to_string()),
        provider_specialty: None,
    });
    let (app, _) = app_with(MockDirectoryService::new().with_providers(providers));

    let response = get(app, "/providers").await;

    assert_status(&response, StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert!(body[2]["provider_specialty"].is_null());
    assert_eq!(body[2].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn test_filter_providers_repeated_parameter() {
    let (app, mock) = app_with(MockDirectoryService::new().with_providers(sample_providers()));

    let response = get(app, "/providers/filter?specialty=Surgery&specialty=Diagnostics").await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Server Error");
    assert_eq!(mock.data_source_calls(), 0);
}
