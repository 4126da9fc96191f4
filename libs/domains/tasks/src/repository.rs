use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{Task, TaskInput};

/// Data access for tasks.
///
/// Every method takes the connection to run on: the pool handle for plain
/// reads, or an open transaction for writes (and for reads that must see
/// that transaction's uncommitted rows).
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Every stored task, in no particular order
    async fn list<C>(&self, conn: &C) -> TaskResult<Vec<Task>>
    where
        C: ConnectionTrait;

    /// Fails with `TaskError::NotFound` when no row has `id`
    async fn get_by_id<C>(&self, conn: &C, id: Uuid) -> TaskResult<Task>
    where
        C: ConnectionTrait;

    /// Insert `task` as given; duplicate ids are left to the store to reject
    async fn create<C>(&self, conn: &C, task: &Task) -> TaskResult<()>
    where
        C: ConnectionTrait;

    /// Replace the writable fields of task `id` and set its `updated_at`
    async fn update<C>(
        &self,
        conn: &C,
        id: Uuid,
        input: &TaskInput,
        updated_at: DateTime<Utc>,
    ) -> TaskResult<()>
    where
        C: ConnectionTrait;

    async fn delete<C>(&self, conn: &C, id: Uuid) -> TaskResult<()>
    where
        C: ConnectionTrait;
}
