//! Handlers for the `/tasks` resource.
//!
//! Two access paths share one repository:
//!
//! - The unscoped path works on the whole collection and needs no
//!   credential.
//! - The identity-scoped path requires a credential, pins the `user`
//!   reference to the caller, and publishes a mutation event after each
//!   successful write.
//!
//! Event publication is fire-and-forget: the response reflects only the
//! store write, and delivery failure is invisible to the caller.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_db::models::task::{Task, TaskDocument};
use taskboard_db::repositories::TaskRepo;
use taskboard_events::TaskEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Task",
        id: id.to_string(),
    })
}

fn to_json(task: &Task) -> AppResult<serde_json::Value> {
    serde_json::to_value(task).map_err(|e| AppError::InternalError(e.to_string()))
}

// ---------------------------------------------------------------------------
// Unscoped access path
// ---------------------------------------------------------------------------

/// Query parameters for the unscoped list.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    /// `expand=refs` resolves project/assignee references into embedded
    /// summaries.
    pub expand: Option<String>,
}

/// POST /tasks/new -- persist an arbitrary task document as-is.
pub async fn create(
    State(state): State<AppState>,
    Json(doc): Json<TaskDocument>,
) -> AppResult<(StatusCode, Json<Task>)> {
    doc.validate_refs()?;
    let task = TaskRepo::create(&state.pool, &doc).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/ -- all tasks, optionally with references resolved.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> AppResult<Response> {
    let tasks = TaskRepo::list(&state.pool).await?;
    if query.expand.as_deref() == Some("refs") {
        let resolved = TaskRepo::resolve_refs(&state.pool, tasks).await?;
        Ok(Json(resolved).into_response())
    } else {
        Ok(Json(tasks).into_response())
    }
}

/// GET /tasks/{id} -- a single task with references resolved.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let task = TaskRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    let mut resolved = TaskRepo::resolve_refs(&state.pool, vec![task]).await?;
    let body = resolved
        .pop()
        .ok_or_else(|| AppError::InternalError("reference resolution yielded nothing".into()))?;
    Ok(Json(body))
}

/// PUT /tasks/update/{id} -- full-document replace with validation re-run.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(doc): Json<TaskDocument>,
) -> AppResult<Json<Task>> {
    doc.validate_refs()?;
    let task = TaskRepo::replace(&state.pool, &id, &doc)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(task))
}

/// DELETE /tasks/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !TaskRepo::delete(&state.pool, &id).await? {
        return Err(not_found(&id));
    }
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

/// GET /tasks/project/{project_id} -- tasks referencing a project, with
/// references resolved.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<serde_json::Value>>> {
    let tasks = TaskRepo::list_by_project(&state.pool, &project_id).await?;
    let resolved = TaskRepo::resolve_refs(&state.pool, tasks).await?;
    Ok(Json(resolved))
}

// ---------------------------------------------------------------------------
// Identity-scoped access path
// ---------------------------------------------------------------------------

/// POST /tasks/ -- create a task owned by the caller; publishes `taskAdded`.
pub async fn create_scoped(
    State(state): State<AppState>,
    user: AuthUser,
    Json(mut doc): Json<TaskDocument>,
) -> AppResult<(StatusCode, Json<Task>)> {
    doc.user = Some(user.user_id.to_string());
    doc.validate_refs()?;
    let task = TaskRepo::create(&state.pool, &doc).await?;
    state.event_bus.publish(TaskEvent::added(to_json(&task)?));
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/mine -- tasks whose `user` reference is the caller.
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_user(&state.pool, &user.user_id).await?;
    Ok(Json(tasks))
}

/// PUT /tasks/{id} -- full-document replace; publishes `taskUpdated`.
///
/// The `user` reference is re-pinned to the caller so a replace cannot
/// silently orphan the task from its owner's listing.
pub async fn update_scoped(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(mut doc): Json<TaskDocument>,
) -> AppResult<Json<Task>> {
    doc.user = Some(user.user_id.to_string());
    doc.validate_refs()?;
    let task = TaskRepo::replace(&state.pool, &id, &doc)
        .await?
        .ok_or_else(|| not_found(&id))?;
    state.event_bus.publish(TaskEvent::updated(to_json(&task)?));
    Ok(Json(task))
}

/// DELETE /tasks/{id} -- publishes `taskDeleted` carrying the id string.
pub async fn delete_scoped(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !TaskRepo::delete(&state.pool, &id).await? {
        return Err(not_found(&id));
    }
    state.event_bus.publish(TaskEvent::deleted(&id));
    Ok(Json(MessageResponse::new("Task deleted successfully")))
}
