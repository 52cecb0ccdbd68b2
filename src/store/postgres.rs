use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskStatus, User};
use crate::store::{NewTask, NewUser, TaskChanges, TaskFilter, TaskStore, UserChanges, UserStore};

const USER_COLUMNS: &str = "id, name, email, password, birth_date, sex, company, photo, created_at";
const TASK_COLUMNS: &str =
    "id, name, description, deadline, status, private, creator_id, creator_name, created_at";

/// Postgres-backed store handle. Cheap to clone; wraps the shared `sqlx` pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert_user(&self, user: NewUser) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (id, name, email, password, birth_date, sex, company, photo) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.birth_date)
        .bind(user.sex)
        .bind(user.company)
        .bind(user.photo)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_user(&self, id: Uuid, changes: UserChanges) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE users SET name = $1, email = $2, birth_date = $3, sex = $4, \
             company = $5, photo = $6, password = COALESCE($7, password) WHERE id = $8",
        )
        .bind(changes.name)
        .bind(changes.email)
        .bind(changes.birth_date)
        .bind(changes.sex)
        .bind(changes.company)
        .bind(changes.photo)
        .bind(changes.password_hash)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    async fn insert_task(&self, task: NewTask) -> Result<Uuid, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO tasks (id, name, description, deadline, status, private, creator_id, creator_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING id",
        )
        .bind(Uuid::new_v4())
        .bind(task.name)
        .bind(task.description)
        .bind(task.deadline)
        .bind(TaskStatus::Registered)
        .bind(task.private)
        .bind(task.creator_id)
        .bind(task.creator_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_task(&self, id: Uuid, changes: TaskChanges) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE tasks SET name = $1, description = $2, deadline = $3, status = $4, \
             private = $5 WHERE id = $6",
        )
        .bind(changes.name)
        .bind(changes.description)
        .bind(changes.deadline)
        .bind(changes.status)
        .bind(changes.private)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn search_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, AppError> {
        let sql = search_sql(filter);
        let mut query = sqlx::query_as::<_, Task>(&sql).bind(filter.viewer_id);

        if !filter.show_completed {
            query = query.bind(TaskStatus::Completed);
        }
        if let Some(search) = &filter.search_input {
            query = query.bind(format!("%{}%", search));
        }

        let tasks = query.fetch_all(&self.pool).await?;
        Ok(tasks)
    }
}

/// Builds the search statement for a filter.
///
/// The predicate is a conjunction assembled in a fixed clause order: the
/// visibility disjunction first, then the status clause (only when completed
/// tasks were not requested), then the name clause (only when a search string
/// is present). Bind parameters follow the same order.
#[allow(unused_assignments)]
fn search_sql(filter: &TaskFilter) -> String {
    let mut sql = format!(
        "SELECT {} FROM tasks \
         WHERE (private = false OR (private = true AND creator_id = $1))",
        TASK_COLUMNS
    );
    let mut param = 2;

    if !filter.show_completed {
        sql.push_str(&format!(" AND status <> ${}", param));
        param += 1;
    }
    if filter.search_input.is_some() {
        sql.push_str(&format!(" AND name LIKE ${}", param));
        param += 1;
    }

    sql.push_str(" ORDER BY created_at DESC");
    sql
}
