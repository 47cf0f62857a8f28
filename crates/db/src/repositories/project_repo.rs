//! Repository for the `projects` table.

use sqlx::PgPool;
use taskboard_core::types::DocId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, start_date, end_date, priority, status, \
                       admin, collaborators, tasks, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `admin`, returning the created row.
    ///
    /// `collaborators` and `tasks` start empty via the schema defaults.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        admin: &DocId,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, name, description, start_date, end_date, priority, status, admin)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(DocId::generate().as_str())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.priority.as_str())
            .bind(input.status.as_str())
            .bind(admin.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &PgPool, id: &DocId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// List all projects administered by the given identity, newest first.
    pub async fn list_by_admin(pool: &PgPool, admin: &DocId) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE admin = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query)
            .bind(admin.as_str())
            .fetch_all(pool)
            .await
    }

    /// Partial update: only non-`None` fields in `input` are applied.
    /// `admin`, `collaborators`, and `tasks` are never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &DocId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                priority = COALESCE($6, priority),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id.as_str())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.priority.map(|p| p.as_str()))
            .bind(input.status.map(|s| s.as_str()))
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id, returning the removed row.
    ///
    /// No cascade: tasks and invitations referencing the project survive as
    /// dangling references.
    pub async fn delete(pool: &PgPool, id: &DocId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }
}
