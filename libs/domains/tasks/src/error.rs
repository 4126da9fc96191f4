use axum_helpers::AppError;
use sea_orm::DbErr;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// No stored task has this id
    #[error("task not found: {0}")]
    NotFound(String),

    /// Input broke one or more field rules; message is `"field: rule, ..."`
    #[error("{0}")]
    Validation(String),

    /// A stored row could not be mapped onto a task
    #[error("failed to decode task row: {0}")]
    Decode(String),

    #[error("database error: {0}")]
    Store(String),

    /// Beginning or committing a transaction failed
    #[error("transaction error: {0}")]
    Transaction(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    pub fn transaction(err: DbErr) -> Self {
        TaskError::Transaction(err.to_string())
    }

    /// Translate into the HTTP error for `operation`.
    ///
    /// Store and transaction failures on writes are reported generically;
    /// on reads the underlying error text is passed through.
    pub fn into_app_error(self, operation: TaskOperation) -> AppError {
        match self {
            TaskError::NotFound(_) => AppError::NotFound(self.to_string()),
            TaskError::Validation(msg) => AppError::Validation(msg),
            _ if operation.is_write() => {
                AppError::InternalServerError(format!("Failed to {operation} task"))
            }
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl From<DbErr> for TaskError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Type(_) | DbErr::TryIntoErr { .. } => TaskError::Decode(err.to_string()),
            _ => TaskError::Store(err.to_string()),
        }
    }
}

/// The five task operations, used for error mapping and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum TaskOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl TaskOperation {
    pub fn is_write(self) -> bool {
        matches!(
            self,
            TaskOperation::Create | TaskOperation::Update | TaskOperation::Delete
        )
    }
}
