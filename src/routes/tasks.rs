use actix_web::{web, HttpResponse};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{TaskInput, TaskQuery, TaskUpdate};
use crate::services::tasks;
use crate::store::PgStore;

/// Creates a new task owned by the authenticated user.
///
/// ## Responses:
/// - `201 Created`: Returns the generated id as `{"id": ...}`.
/// - `403 Forbidden`: If the request lacks a valid session cookie.
/// - `422 Unprocessable Entity`: If input validation on `TaskInput` fails.
pub async fn create(
    store: web::Data<PgStore>,
    input: web::Json<TaskInput>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    input.validate()?;

    let id = tasks::create(store.get_ref(), input.into_inner(), user.0).await?;

    Ok(HttpResponse::Created().json(json!({ "id": id })))
}

/// Updates a task. Creator-only.
///
/// ## Responses:
/// - `204 No Content`: On success.
/// - `400 Bad Request`: If no task with the given id exists.
/// - `403 Forbidden`: If the caller is not the creator, or not logged in.
pub async fn update(
    store: web::Data<PgStore>,
    task_id: web::Path<Uuid>,
    input: web::Json<TaskUpdate>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    input.validate()?;

    tasks::update(store.get_ref(), input.into_inner(), task_id.into_inner(), user.0).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Deletes a task. Creator-only.
pub async fn delete(
    store: web::Data<PgStore>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    tasks::delete(store.get_ref(), task_id.into_inner(), user.0).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Searches tasks visible to the authenticated viewer.
///
/// ## Query Parameters:
/// - `showCompleted` (optional, default false): include `Completed` tasks.
/// - `searchInput` (optional): case-sensitive substring filter on the name.
///
/// Private tasks of other users never appear in the results.
pub async fn search(
    store: web::Data<PgStore>,
    query: web::Query<TaskQuery>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let results = tasks::search(
        store.get_ref(),
        query.show_completed.unwrap_or(false),
        query.search_input,
        user.0,
    )
    .await?;

    Ok(HttpResponse::Ok().json(results))
}

/// Fetches a single task by id.
pub async fn get(
    store: web::Data<PgStore>,
    task_id: web::Path<Uuid>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let task = tasks::get(store.get_ref(), task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}
