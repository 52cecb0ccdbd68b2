use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents the status of a task.
/// Corresponds to the `task_status` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    /// Task has been created and is still open.
    Registered,
    /// Task is done and hidden from search unless completed tasks are requested.
    Completed,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    /// Private tasks are visible only to their creator in search results.
    pub private: bool,
    /// Identifier of the creating user. Immutable after creation.
    pub creator_id: Uuid,
    /// Denormalized snapshot of the creator's display name at creation time.
    pub creator_name: String,
    pub created_at: DateTime<Utc>,
}

/// Input structure for creating a task. The creator id comes from the
/// authenticated session, never from the payload; status always starts
/// as `Registered`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub private: bool,
    #[validate(length(min = 1, max = 100))]
    pub creator_name: String,
}

/// Input structure for updating a task. The creator name snapshot and
/// creator id are not updatable.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub private: bool,
}

/// Query parameters accepted by the task search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    /// Include `Completed` tasks in the results. Defaults to false.
    pub show_completed: Option<bool>,
    /// Case-sensitive substring filter on the task name. Empty or absent
    /// means no name filter.
    pub search_input: Option<String>,
}
