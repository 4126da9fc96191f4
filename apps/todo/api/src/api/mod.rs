use axum::{Json, Router, routing::get};
use domain_tasks::{PgTaskRepository, TaskService, handlers as tasks};

pub mod health;

/// All application routes: tasks CRUD, readiness and the OpenAPI document.
///
/// Returns a stateless router; `/health` and the middleware stack are added in `main`.
pub fn routes(state: &crate::state::AppState) -> Router {
    let service = TaskService::new(state.db.clone(), PgTaskRepository::new());

    Router::new()
        .merge(tasks::router(service))
        .merge(ready_router(state.clone()))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(crate::openapi::document()) }),
        )
}

/// `GET /ready`, which checks the database before reporting ready.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
