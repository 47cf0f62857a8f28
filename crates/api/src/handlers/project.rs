//! Handlers for the `/projects` resource.
//!
//! Every operation requires an authenticated identity. Identifier format is
//! checked before any store access: a non-24-hex id short-circuits with 400.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taskboard_core::error::CoreError;
use taskboard_core::types::DocId;
use taskboard_db::models::project::{
    CreateProject, Project, ProjectDetail, ProjectView, UpdateProject,
};
use taskboard_db::repositories::{InvitationRepo, ProjectRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn not_found(id: &DocId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: id.to_string(),
    })
}

/// POST /projects/new
///
/// The caller's identity becomes `admin`; the payload cannot set it.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let project = ProjectRepo::create(&state.pool, &input, &user.user_id).await?;
    tracing::info!(project_id = %project.id, admin = %project.admin, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects/all -- all projects administered by the caller.
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_admin(&state.pool, &user.user_id).await?;
    Ok(Json(projects))
}

/// GET /projects/view/{id} -- public projection, collaborators omitted.
pub async fn view(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectView>> {
    let id = DocId::parse(&id)?;
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(project.into()))
}

/// GET /projects/{id} -- detailed projection with collaborators resolved
/// into `{email, name}` profiles.
pub async fn detail(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectDetail>> {
    let id = DocId::parse(&id)?;
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    let collaborators = InvitationRepo::find_profiles(&state.pool, &project.collaborators).await?;
    Ok(Json(ProjectDetail {
        view: project.into(),
        collaborators,
    }))
}

/// PUT /projects/edit/{id}
///
/// Partial update driven by field presence: absent fields preserve their
/// stored value, present fields overwrite (an explicit empty string clears).
pub async fn edit(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let id = DocId::parse(&id)?;
    let project = ProjectRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(project))
}

#[derive(Debug, Serialize)]
pub struct DeleteProjectResponse {
    pub message: &'static str,
    pub project: Project,
}

/// DELETE /projects/delete/{id}
///
/// Only the project's `admin` may delete it. No cascade: tasks and
/// invitations referencing the project survive as dangling references.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteProjectResponse>> {
    let id = DocId::parse(&id)?;
    let project = ProjectRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    if project.admin != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project admin can delete it".into(),
        )));
    }

    let deleted = ProjectRepo::delete(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(DeleteProjectResponse {
        message: "Project deleted successfully",
        project: deleted,
    }))
}
