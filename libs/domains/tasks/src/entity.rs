use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{Task, TaskInput};

/// Row of the `tasks` table. Field order is the column order used by
/// every `SELECT`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTimeWithTimeZone>,
    pub completed: bool,
    pub is_archived: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            due_date: model.due_date.map(Into::into),
            completed: model.completed,
            is_archived: model.is_archived,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Every column set, for `INSERT`.
impl From<&Task> for ActiveModel {
    fn from(task: &Task) -> Self {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            due_date: Set(task.due_date.map(Into::into)),
            completed: Set(task.completed),
            is_archived: Set(task.is_archived),
            created_at: Set(task.created_at.into()),
            updated_at: Set(task.updated_at.into()),
        }
    }
}

impl ActiveModel {
    /// Caller-writable columns plus `updated_at`; `id` and `created_at` stay unset.
    pub fn for_update(input: &TaskInput, updated_at: DateTimeUtc) -> Self {
        ActiveModel {
            title: Set(input.title.clone()),
            description: Set(input.description.clone()),
            due_date: Set(input.due_date.map(Into::into)),
            completed: Set(input.completed),
            is_archived: Set(input.is_archived),
            updated_at: Set(updated_at.into()),
            ..Default::default()
        }
    }
}
