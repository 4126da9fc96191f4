//! JSON body extractor with a uniform rejection.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Deserializes the request body as JSON.
///
/// Unlike `axum::Json` it does not require a `Content-Type` header, and every
/// failure (unreadable body, syntax error, wrong shape) is rejected with
/// [`AppError::InvalidBody`]. Unknown fields are ignored unless `T` denies them.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<TaskInput>) -> Result<Json<Task>, AppError> {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read request body");
            AppError::InvalidBody
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Failed to decode request body");
            AppError::InvalidBody
        })?;

        Ok(JsonBody(value))
    }
}
