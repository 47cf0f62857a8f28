//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::project::{Priority, Status};
use taskboard_core::time;
use taskboard_core::types::{DocId, Timestamp};
use validator::Validate;

use crate::models::invitation::CollaboratorProfile;

/// A project row from the `projects` table.
///
/// `collaborators` holds invitation ids, `tasks` holds task ids; both are
/// plain references that the store does not keep consistent with the
/// referenced tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    #[sqlx(try_from = "String")]
    pub id: DocId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    #[sqlx(try_from = "String")]
    pub status: Status,
    #[sqlx(try_from = "String")]
    pub admin: DocId,
    pub collaborators: Vec<String>,
    pub tasks: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection of a project: everything except `admin` and
/// `collaborators`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: DocId,
    pub name: String,
    pub description: Option<String>,
    pub status: Status,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub priority: Priority,
    pub tasks: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Project> for ProjectView {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            status: p.status,
            start_date: p.start_date,
            end_date: p.end_date,
            priority: p.priority,
            tasks: p.tasks,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Detailed projection: the public view plus resolved collaborator profiles.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub view: ProjectView,
    pub collaborators: Vec<CollaboratorProfile>,
}

/// DTO for creating a new project.
///
/// `admin` is intentionally absent: it always comes from the authenticated
/// identity, never from the payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "time::deserialize_flexible")]
    pub start_date: Timestamp,
    #[serde(deserialize_with = "time::deserialize_flexible")]
    pub end_date: Timestamp,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

/// DTO for updating an existing project. Only fields present in the payload
/// are applied; an explicit empty string clears a string field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "time::deserialize_flexible_opt")]
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "time::deserialize_flexible_opt")]
    pub end_date: Option<Timestamp>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

/// Lightweight projection embedded when task project references are expanded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectSummary {
    #[sqlx(try_from = "String")]
    pub id: DocId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub status: Status,
}
