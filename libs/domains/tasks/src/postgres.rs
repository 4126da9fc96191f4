use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{Task, TaskInput},
    repository::TaskRepository,
};

/// [`TaskRepository`] over the PostgreSQL `tasks` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgTaskRepository;

impl PgTaskRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn list<C>(&self, conn: &C) -> TaskResult<Vec<Task>>
    where
        C: ConnectionTrait,
    {
        let models = entity::Entity::find().all(conn).await?;
        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn get_by_id<C>(&self, conn: &C, id: Uuid) -> TaskResult<Task>
    where
        C: ConnectionTrait,
    {
        entity::Entity::find_by_id(id)
            .one(conn)
            .await?
            .map(Task::from)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    async fn create<C>(&self, conn: &C, task: &Task) -> TaskResult<()>
    where
        C: ConnectionTrait,
    {
        entity::Entity::insert(entity::ActiveModel::from(task))
            .exec_without_returning(conn)
            .await?;

        tracing::info!(task_id = %task.id, "Created task");
        Ok(())
    }

    async fn update<C>(
        &self,
        conn: &C,
        id: Uuid,
        input: &TaskInput,
        updated_at: DateTime<Utc>,
    ) -> TaskResult<()>
    where
        C: ConnectionTrait,
    {
        // PostgreSQL counts matched rows, so an update that changes nothing still reports 1.
        let result = entity::Entity::update_many()
            .set(entity::ActiveModel::for_update(input, updated_at))
            .filter(entity::Column::Id.eq(id))
            .exec(conn)
            .await?;

        if result.rows_affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        tracing::info!(task_id = %id, "Updated task");
        Ok(())
    }

    async fn delete<C>(&self, conn: &C, id: Uuid) -> TaskResult<()>
    where
        C: ConnectionTrait,
    {
        let result = entity::Entity::delete_by_id(id).exec(conn).await?;

        if result.rows_affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        tracing::info!(task_id = %id, "Deleted task");
        Ok(())
    }
}
