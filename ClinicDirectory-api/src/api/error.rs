use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use clinic_directory_domain::services::DirectoryServiceError;

/// Body sent for every backend failure; the cause only goes to the log
pub const SERVER_ERROR_BODY: &str = "Server Error";

/// Public error for the directory endpoints, rendered as plain text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Required query parameter missing or empty
    #[error("{0}")]
    BadRequest(&'static str),

    /// Any database or query failure
    #[error("{}", SERVER_ERROR_BODY)]
    Internal,
}

impl ApiError {
    /// Log a service failure under `context` and convert it for the client
    pub fn from_service(context: &str, err: DirectoryServiceError) -> Self {
        match err {
            DirectoryServiceError::MissingParameter(message) => {
                warn!("{}: {}", context, message);
                ApiError::BadRequest(message)
            }
            DirectoryServiceError::RepositoryError(e) => {
                error!("{}: {}", context, e);
                ApiError::Internal
            }
        }
    }

    /// A query string the extractor cannot map onto the filter parameters,
    /// such as a repeated key, is answered like a backend failure
    pub fn from_query_rejection(context: &str, rejection: QueryRejection) -> Self {
        warn!("{}: unusable query string: {}", context, rejection.body_text());
        ApiError::Internal
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::BadRequest(message) => message,
            ApiError::Internal => SERVER_ERROR_BODY,
        };

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use clinic_directory_data::database::DatabaseError;
    use clinic_directory_data::repository::RepositoryError;

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let err = DirectoryServiceError::RepositoryError(RepositoryError::Database(
            DatabaseError::ConfigError("password authentication failed".to_string()),
        ));

        let response = ApiError::from_service("Error fetching patients", err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Server Error");
    }

    #[tokio::test]
    async fn test_bad_request_is_plain_text() {
        let response = ApiError::BadRequest("Specialty query parameter is required.").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Specialty query parameter is required.");
    }
}
