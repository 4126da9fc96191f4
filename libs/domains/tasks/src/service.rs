use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskInput, now};
use crate::repository::TaskRepository;

/// Task operations over a connection pool.
///
/// Writes run inside a transaction that commits only after the repository
/// call succeeds; on any early return the transaction is dropped and rolls
/// back.
pub struct TaskService<R: TaskRepository> {
    db: DatabaseConnection,
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(db: DatabaseConnection, repository: R) -> Self {
        Self {
            db,
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.list(&self.db).await
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository.get_by_id(&self.db, id).await
    }

    /// Persist a new task built from `input` and return it as stored.
    ///
    /// Id and timestamps are assigned here; nothing the caller sends for
    /// them is used.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: TaskInput) -> TaskResult<Task> {
        let task = Task::new(input);

        let txn = self.db.begin().await.map_err(TaskError::transaction)?;
        self.repository.create(&txn, &task).await?;
        txn.commit().await.map_err(TaskError::transaction)?;

        Ok(task)
    }

    /// Replace the writable fields of task `id`, refresh `updated_at`, and
    /// return the row as read back inside the same transaction.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: TaskInput) -> TaskResult<Task> {
        let txn = self.db.begin().await.map_err(TaskError::transaction)?;
        self.repository.update(&txn, id, &input, now()).await?;
        let task = self.repository.get_by_id(&txn, id).await?;
        txn.commit().await.map_err(TaskError::transaction)?;

        Ok(task)
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        let txn = self.db.begin().await.map_err(TaskError::transaction)?;
        self.repository.delete(&txn, id).await?;
        txn.commit().await.map_err(TaskError::transaction)?;

        Ok(())
    }
}
