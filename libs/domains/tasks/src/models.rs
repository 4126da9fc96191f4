use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{validate_description, validate_title};

/// A stored task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Task {
    /// Assigned by the server at creation; never changes
    #[ts(as = "String")]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[ts(as = "Option<String>")]
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub is_archived: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// Caller-writable fields of a task, as accepted by create and update.
///
/// Server-owned fields (`id`, `createdAt`, `updatedAt`) in a request body are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaskInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    /// An empty string is stored as no description
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(custom(function = "validate_description"))]
    pub description: Option<String>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub is_archived: bool,
}

impl TaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Task {
    /// Build a new task from `input` with a fresh id and `created_at == updated_at`.
    pub fn new(input: TaskInput) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            due_date: input.due_date.map(|due| due.trunc_subsecs(6)),
            completed: input.completed,
            is_archived: input.is_archived,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Current time at the precision PostgreSQL stores (microseconds), so values
/// handed back to callers equal what a later read returns.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
