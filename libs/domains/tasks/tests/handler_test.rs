//! Handler tests for the Tasks domain
//!
//! These drive `handlers::router` with `oneshot()` over a mocked connection
//! and check:
//! - request decoding and validation
//! - status codes and `{"error": ...}` bodies
//! - method handling on `/tasks`, `/tasks/` and `/tasks/{id}`

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use domain_tasks::*;
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn app(db: MockDatabase) -> Router {
    handlers::router(TaskService::new(db.into_connection(), PgTaskRepository::new()))
}

fn empty_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

fn row(id: Uuid, title: &str) -> entity::Model {
    let now = Utc::now();
    entity::Model {
        id,
        title: title.to_string(),
        description: None,
        due_date: None,
        completed: false,
        is_archived: false,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn error_message(body: Body) -> String {
    let json: Value = json_body(body).await;
    json["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_list_tasks_returns_200_with_array() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let app = app(empty_db().append_query_results([vec![row(a, "first"), row(b, "second")]]));

    let response = app.oneshot(request("GET", "/tasks", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = json_body(response.into_body()).await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, a);
}

#[tokio::test]
async fn test_list_tasks_store_failure_returns_500_with_error_text() {
    let app = app(empty_db().append_query_errors([DbErr::Custom("connection reset".into())]));

    let response = app.oneshot(request("GET", "/tasks", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error_message(response.into_body()).await.contains("connection reset"));
}

#[tokio::test]
async fn test_create_task_returns_201() {
    let app = app(empty_db().append_exec_results([exec(1)]));

    let response = app
        .oneshot(request(
            "POST",
            "/tasks",
            Some(json!({"title": "Buy milk", "description": "two liters"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let task: Task = json_body(response.into_body()).await;
    assert!(!task.id.is_nil());
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description.as_deref(), Some("two liters"));
    assert_eq!(task.created_at, task.updated_at);
}

#[tokio::test]
async fn test_create_task_ignores_client_id() {
    let client_id = Uuid::new_v4();
    let app = app(empty_db().append_exec_results([exec(1)]));

    let response = app
        .oneshot(request(
            "POST",
            "/tasks",
            Some(json!({"id": client_id, "title": "Buy milk"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let task: Task = json_body(response.into_body()).await;
    assert_ne!(task.id, client_id);
}

#[tokio::test]
async fn test_create_task_without_title_returns_400() {
    let app = app(empty_db());

    let response = app
        .oneshot(request("POST", "/tasks", Some(json!({"description": "no title"}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response.into_body()).await, "title: required");
}

#[tokio::test]
async fn test_create_task_with_long_title_returns_400() {
    let app = app(empty_db());

    let response = app
        .oneshot(request("POST", "/tasks", Some(json!({"title": "a".repeat(101)}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response.into_body()).await, "title: max");
}

#[tokio::test]
async fn test_create_task_malformed_body_returns_400() {
    let app = app(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/tasks")
                .body(Body::from("{\"title\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response.into_body()).await, "Invalid request body");
}

#[tokio::test]
async fn test_create_task_store_failure_returns_generic_500() {
    let app = app(empty_db().append_exec_errors([DbErr::Custom("disk full".into())]));

    let response = app
        .oneshot(request("POST", "/tasks", Some(json!({"title": "Buy milk"}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(response.into_body()).await, "Failed to create task");
}

#[tokio::test]
async fn test_get_task_returns_200() {
    let id = Uuid::new_v4();
    let app = app(empty_db().append_query_results([vec![row(id, "Read me")]]));

    let response = app
        .oneshot(request("GET", &format!("/tasks/{id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = json_body(response.into_body()).await;
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Read me");
    assert!(json["dueDate"].is_null());
    assert!(json["description"].is_null());
}

#[tokio::test]
async fn test_get_missing_task_returns_404() {
    let id = Uuid::new_v4();
    let app = app(empty_db().append_query_results([Vec::<entity::Model>::new()]));

    let response = app
        .oneshot(request("GET", &format!("/tasks/{id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(response.into_body()).await,
        format!("task not found: {id}")
    );
}

#[tokio::test]
async fn test_get_task_with_non_uuid_id_returns_404() {
    let app = app(empty_db());

    let response = app
        .oneshot(request("GET", "/tasks/not-a-uuid", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(response.into_body()).await,
        "task not found: not-a-uuid"
    );
}

#[tokio::test]
async fn test_empty_task_id_returns_400() {
    for method in ["GET", "PUT", "DELETE"] {
        let response = app(empty_db())
            .oneshot(request(method, "/tasks/", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(error_message(response.into_body()).await, "Task ID is required");
    }
}

#[tokio::test]
async fn test_update_task_returns_200_with_stored_row() {
    let id = Uuid::new_v4();
    let app = app(
        empty_db()
            .append_exec_results([exec(1)])
            .append_query_results([vec![row(id, "Renamed")]]),
    );

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/tasks/{id}"),
            Some(json!({"title": "Renamed", "completed": true})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let task: Task = json_body(response.into_body()).await;
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Renamed");
}

#[tokio::test]
async fn test_update_missing_task_returns_404() {
    let id = Uuid::new_v4();
    let app = app(empty_db().append_exec_results([exec(0)]));

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/tasks/{id}"),
            Some(json!({"title": "Renamed"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_task_invalid_input_returns_400() {
    let id = Uuid::new_v4();
    let app = app(empty_db());

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/tasks/{id}"),
            Some(json!({"title": "", "description": "d".repeat(256)})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(response.into_body()).await,
        "title: required, description: max"
    );
}

#[tokio::test]
async fn test_update_task_store_failure_returns_generic_500() {
    let id = Uuid::new_v4();
    let app = app(empty_db().append_exec_errors([DbErr::Custom("deadlock".into())]));

    let response = app
        .oneshot(request(
            "PUT",
            &format!("/tasks/{id}"),
            Some(json!({"title": "Renamed"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(response.into_body()).await, "Failed to update task");
}

#[tokio::test]
async fn test_delete_task_returns_204() {
    let id = Uuid::new_v4();
    let app = app(empty_db().append_exec_results([exec(1)]));

    let response = app
        .oneshot(request("DELETE", &format!("/tasks/{id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_delete_missing_task_returns_404() {
    let id = Uuid::new_v4();
    let app = app(empty_db().append_exec_results([exec(0)]));

    let response = app
        .oneshot(request("DELETE", &format!("/tasks/{id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_methods_return_405() {
    let id = Uuid::new_v4();
    for (method, uri) in [
        ("PATCH", "/tasks".to_string()),
        ("DELETE", "/tasks".to_string()),
        ("POST", format!("/tasks/{id}")),
        ("PATCH", format!("/tasks/{id}")),
    ] {
        let response = app(empty_db())
            .oneshot(request(method, &uri, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        let json: Value = json_body(response.into_body()).await;
        assert_eq!(json, json!({"error": "method not allowed"}));
    }
}
