//!
//! # Data-store seam
//!
//! The resource services operate against the [`UserStore`] and [`TaskStore`]
//! traits rather than a concrete database handle. The production
//! implementation is [`PgStore`], an explicitly constructed handle around a
//! `sqlx` connection pool that is injected where needed; tests substitute an
//! in-memory double without any global state.

pub mod postgres;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskStatus, User};

pub use postgres::PgStore;

/// A user row ready for insertion. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub company: String,
    pub photo: Option<String>,
}

/// Field values applied by a user update. A `None` password hash leaves the
/// stored digest untouched.
#[derive(Debug, Clone)]
pub struct UserChanges {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub company: String,
    pub photo: Option<String>,
}

/// A task row ready for insertion. Status always starts as `Registered`.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub private: bool,
    pub creator_id: Uuid,
    pub creator_name: String,
}

/// Field values applied by a task update. Creator id and creator name are
/// immutable and deliberately absent.
#[derive(Debug, Clone)]
pub struct TaskChanges {
    pub name: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
    pub status: TaskStatus,
    pub private: bool,
}

/// Search filter for task visibility and the optional status/name clauses.
#[derive(Debug, Clone)]
pub struct TaskFilter {
    /// The authenticated viewer; private tasks of other users are excluded.
    pub viewer_id: Uuid,
    /// When false, `Completed` tasks are filtered out.
    pub show_completed: bool,
    /// Case-sensitive substring filter on the task name, when non-empty.
    pub search_input: Option<String>,
}

#[async_trait]
pub trait UserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
    /// Inserts a new user and returns the generated id.
    async fn insert_user(&self, user: NewUser) -> Result<Uuid, AppError>;
    async fn update_user(&self, id: Uuid, changes: UserChanges) -> Result<(), AppError>;
}

#[async_trait]
pub trait TaskStore {
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError>;
    /// Inserts a new task and returns the generated id.
    async fn insert_task(&self, task: NewTask) -> Result<Uuid, AppError>;
    async fn update_task(&self, id: Uuid, changes: TaskChanges) -> Result<(), AppError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), AppError>;
    async fn search_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError>;
}
