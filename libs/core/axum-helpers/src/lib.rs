//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`errors`]**: `AppError`, the `{"error": "..."}` response body, log error codes
//! - **[`extractors`]**: `JsonBody`, a JSON extractor rejecting with `AppError`
//! - **[`server`]**: middleware stack, health/readiness, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse, handlers::method_not_allowed};
pub use extractors::JsonBody;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
