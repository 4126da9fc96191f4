pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// { "error": "task not found: 1b4e28ba-2fa1-41d2-883f-0016d3cca427" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error type handlers return; converts into an HTTP response.
///
/// The display text of each variant is exactly what the client receives.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Body is not valid JSON for the expected type
    #[error("Invalid request body")]
    InvalidBody,

    /// Field validation failed; the message lists `field: rule` entries
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::InvalidBody => ErrorCode::InvalidJson,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();
        let message = self.to_string();

        match &self {
            AppError::InternalServerError(_) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", message);
            }
            AppError::ServiceUnavailable(_) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", message);
            }
            _ => {
                tracing::info!(
                    error_code = code.code(),
                    status = status.as_u16(),
                    "Request rejected: {}",
                    message
                );
            }
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_body_response() {
        let (status, body) = render(AppError::InvalidBody).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Invalid request body"}));
    }

    #[tokio::test]
    async fn test_not_found_message_is_verbatim() {
        let (status, body) = render(AppError::NotFound("task not found: abc".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "task not found: abc");
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let (status, body) = render(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({"error": "method not allowed"}));
    }

    #[tokio::test]
    async fn test_internal_error_has_only_error_field() {
        let (status, body) = render(AppError::InternalServerError("Failed to create task".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.as_object().unwrap().len(), 1);
    }
}
