//! Tasks Domain
//!
//! CRUD over a single `tasks` table, exposed over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP decoding, validation, error → status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Ids, timestamps, transaction lifecycle
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← SQL over a pool handle or an open transaction
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{PgTaskRepository, TaskService, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let service = TaskService::new(db, PgTaskRepository::new());
//! let app = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{TaskError, TaskOperation, TaskResult};
pub use handlers::TasksApiDoc;
pub use models::{Task, TaskInput};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
pub use validation::validate_task;
