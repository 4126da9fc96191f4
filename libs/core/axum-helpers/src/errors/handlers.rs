use axum::response::{IntoResponse, Response};

use super::AppError;

/// Router-level fallback for unknown paths.
pub async fn not_found() -> Response {
    AppError::NotFound("not found".to_string()).into_response()
}

/// Per-route fallback for methods the route does not serve.
///
/// ```ignore
/// Router::new().route("/items", get(list).post(create).fallback(method_not_allowed))
/// ```
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}
