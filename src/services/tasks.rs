use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskInput, TaskUpdate};
use crate::store::{NewTask, TaskChanges, TaskFilter, TaskStore};

/// Creates a task owned by the authenticated caller. The creator id comes
/// from the session, never from the payload; status starts as `Registered`.
pub async fn create<S: TaskStore>(
    store: &S,
    input: TaskInput,
    logged_user_id: Uuid,
) -> Result<Uuid, AppError> {
    store
        .insert_task(NewTask {
            name: input.name,
            description: input.description,
            deadline: input.deadline,
            private: input.private,
            creator_id: logged_user_id,
            creator_name: input.creator_name,
        })
        .await
}

/// Updates a task. Creator-only, per the shared ownership-checked mutation
/// pattern: missing id fails with `InvalidParam` before the permission check,
/// a non-creator fails with `Permission` before any write reaches the store.
pub async fn update<S: TaskStore>(
    store: &S,
    input: TaskUpdate,
    task_id: Uuid,
    logged_user_id: Uuid,
) -> Result<(), AppError> {
    let task = store
        .find_task_by_id(task_id)
        .await?
        .ok_or_else(|| AppError::InvalidParam(format!("Task with id:{} not found.", task_id)))?;

    if task.creator_id != logged_user_id {
        return Err(AppError::Permission(
            "You do not have permission to perform this action.".into(),
        ));
    }

    store
        .update_task(
            task_id,
            TaskChanges {
                name: input.name,
                description: input.description,
                deadline: input.deadline,
                status: input.status,
                private: input.private,
            },
        )
        .await
}

/// Deletes a task. Creator-only, same pattern as [`update`].
pub async fn delete<S: TaskStore>(
    store: &S,
    task_id: Uuid,
    logged_user_id: Uuid,
) -> Result<(), AppError> {
    let task = store
        .find_task_by_id(task_id)
        .await?
        .ok_or_else(|| AppError::InvalidParam(format!("Task with id:{} not found.", task_id)))?;

    if task.creator_id != logged_user_id {
        return Err(AppError::Permission(
            "You do not have permission to perform this action.".into(),
        ));
    }

    store.delete_task(task_id).await
}

/// Fetches a single task by id.
pub async fn get<S: TaskStore>(store: &S, task_id: Uuid) -> Result<Task, AppError> {
    store
        .find_task_by_id(task_id)
        .await?
        .ok_or_else(|| AppError::InvalidParam(format!("Task with id:{} not found.", task_id)))
}

/// Searches tasks visible to the viewer.
///
/// A task is visible iff it is public or the viewer created it. Completed
/// tasks are excluded unless requested; a non-empty search string adds a
/// case-sensitive substring filter on the name.
pub async fn search<S: TaskStore>(
    store: &S,
    show_completed: bool,
    search_input: Option<String>,
    logged_user_id: Uuid,
) -> Result<Vec<Task>, AppError> {
    let filter = TaskFilter {
        viewer_id: logged_user_id,
        show_completed,
        search_input: search_input.filter(|s| !s.is_empty()),
    };

    store.search_tasks(&filter).await
}
