use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{any, get},
};
use axum_helpers::{AppError, ErrorResponse, JsonBody, method_not_allowed};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{TaskError, TaskOperation};
use crate::models::{Task, TaskInput};
use crate::repository::TaskRepository;
use crate::service::TaskService;
use crate::validation::validate_task;

type SharedService<R> = Arc<TaskService<R>>;

#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, get_task, create_task, update_task, delete_task),
    components(schemas(Task, TaskInput, ErrorResponse)),
    tags((name = "tasks", description = "Task CRUD"))
)]
pub struct TasksApiDoc;

/// Routes for `/tasks` and `/tasks/{id}`.
///
/// Methods a route does not serve answer 405 `{"error":"method not allowed"}`.
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(list_tasks::<R>)
                .post(create_task::<R>)
                .fallback(method_not_allowed),
        )
        .route("/tasks/", any(missing_task_id))
        .route(
            "/tasks/{id}",
            get(get_task::<R>)
                .put(update_task::<R>)
                .delete(delete_task::<R>)
                .fallback(method_not_allowed),
        )
        .with_state(Arc::new(service))
}

/// Log a failed operation and convert it into its HTTP error.
fn failure(operation: TaskOperation, task_id: Option<&str>, err: TaskError) -> AppError {
    match &err {
        TaskError::NotFound(_) | TaskError::Validation(_) => {
            tracing::info!(%operation, task_id, error = %err, "Task request rejected");
        }
        _ => {
            tracing::error!(%operation, task_id, error = %err, "Task operation failed");
        }
    }
    err.into_app_error(operation)
}

/// An id that is not a UUID cannot name a stored task.
fn parse_id(operation: TaskOperation, raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| failure(operation, Some(raw), TaskError::NotFound(raw.to_string())))
}

async fn missing_task_id() -> AppError {
    AppError::BadRequest("Task ID is required".to_string())
}

/// List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks", body = Vec<Task>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): State<SharedService<R>>,
) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = service
        .list_tasks()
        .await
        .map_err(|e| failure(TaskOperation::List, None, e))?;
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, AppError> {
    let op = TaskOperation::Get;
    let id = parse_id(op, &raw_id)?;

    let task = service
        .get_task(id)
        .await
        .map_err(|e| failure(op, Some(&raw_id), e))?;
    Ok(Json(task))
}

/// Create a task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = TaskInput,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorResponse),
        (status = 500, description = "Failed to create task", body = ErrorResponse)
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    JsonBody(input): JsonBody<TaskInput>,
) -> Result<impl IntoResponse, AppError> {
    let op = TaskOperation::Create;
    validate_task(&input).map_err(|e| failure(op, None, e))?;

    let task = service
        .create_task(input)
        .await
        .map_err(|e| failure(op, None, e))?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Replace a task's writable fields
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    request_body = TaskInput,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Failed to update task", body = ErrorResponse)
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<TaskInput>,
) -> Result<Json<Task>, AppError> {
    let op = TaskOperation::Update;
    validate_task(&input).map_err(|e| failure(op, Some(&raw_id), e))?;
    let id = parse_id(op, &raw_id)?;

    let task = service
        .update_task(id, input)
        .await
        .map_err(|e| failure(op, Some(&raw_id), e))?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Failed to delete task", body = ErrorResponse)
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let op = TaskOperation::Delete;
    let id = parse_id(op, &raw_id)?;

    service
        .delete_task(id)
        .await
        .map_err(|e| failure(op, Some(&raw_id), e))?;
    Ok(StatusCode::NO_CONTENT)
}
