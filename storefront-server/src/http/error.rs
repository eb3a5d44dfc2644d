//! API error types with IntoResponse
//!
//! Every handler fault converts to the failure envelope plus the
//! status for its kind: invalid input 400, missing resource 404,
//! storage fault 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use storefront_core::ValidationError;

use crate::db::repos::DbError;

use super::response::Envelope;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload validation failed (400)
    Validation(ValidationError),

    /// Request could not be decoded (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Storage fault (500, detail logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                format!("{resource} '{id}' not found"),
            ),
            Self::Database(e) => {
                // Log the actual error, return a stable message
                tracing::error!("storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage operation failed".to_owned(),
                )
            }
        };

        Envelope::failure(status, error).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404_with_envelope_body() {
        let err = ApiError::NotFound {
            resource: "user",
            id: "7".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "user '7' not found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn database_error_is_500_with_stable_message() {
        let err = ApiError::Database(DbError::Sqlx(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "storage operation failed");
    }

    #[tokio::test]
    async fn db_not_found_converts_to_api_not_found() {
        let err: ApiError = DbError::NotFound {
            resource: "product",
            id: "P1".into(),
        }
        .into();
        assert!(matches!(err, ApiError::NotFound { resource: "product", .. }));
    }
}
