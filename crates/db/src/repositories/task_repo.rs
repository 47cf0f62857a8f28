//! Repository for the `tasks` table.
//!
//! Serves both task access paths (unscoped and identity-scoped); the
//! handlers differ only in filtering and event publication, never in
//! persistence logic.

use std::collections::HashMap;

use sqlx::PgPool;
use taskboard_core::types::DocId;

use crate::models::project::ProjectSummary;
use crate::models::task::{Task, TaskDocument};
use crate::models::user::UserSummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project, assigned_to, user_id, fields, created_at, updated_at";

/// Provides CRUD operations and reference expansion for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task document, returning the created row.
    pub async fn create(pool: &PgPool, doc: &TaskDocument) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (id, project, assigned_to, user_id, fields)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(DocId::generate().as_str())
            .bind(&doc.project)
            .bind(&doc.assigned_to)
            .bind(&doc.user)
            .bind(sqlx::types::Json(&doc.fields))
            .fetch_one(pool)
            .await
    }

    /// Find a task by id. Accepts any id string: an unknown shape is simply
    /// a miss, the 24-hex precondition applies to project routes only.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tasks, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List tasks owned by the given identity (`user` reference), newest first.
    pub async fn list_by_user(pool: &PgPool, user: &DocId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query)
            .bind(user.as_str())
            .fetch_all(pool)
            .await
    }

    /// List tasks referencing the given project, newest first.
    pub async fn list_by_project(pool: &PgPool, project: &str) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query)
            .bind(project)
            .fetch_all(pool)
            .await
    }

    /// Full-document replace by id: every stored reference and field is
    /// overwritten from `doc`. Returns `None` if no row exists.
    pub async fn replace(
        pool: &PgPool,
        id: &str,
        doc: &TaskDocument,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                project = $2,
                assigned_to = $3,
                user_id = $4,
                fields = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&doc.project)
            .bind(&doc.assigned_to)
            .bind(&doc.user)
            .bind(sqlx::types::Json(&doc.fields))
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve `project` and `assigned_to` references into embedded
    /// summaries, batch-joined in two queries.
    ///
    /// A reference whose target no longer exists resolves to `null`,
    /// mirroring a join against a dangling id.
    pub async fn resolve_refs(
        pool: &PgPool,
        tasks: Vec<Task>,
    ) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        let project_ids: Vec<String> = tasks.iter().filter_map(|t| t.project.clone()).collect();
        let user_ids: Vec<String> = tasks.iter().filter_map(|t| t.assigned_to.clone()).collect();

        let projects: Vec<ProjectSummary> =
            sqlx::query_as("SELECT id, name, status FROM projects WHERE id = ANY($1)")
                .bind(&project_ids)
                .fetch_all(pool)
                .await?;
        let users: Vec<UserSummary> =
            sqlx::query_as("SELECT id, email, name FROM users WHERE id = ANY($1)")
                .bind(&user_ids)
                .fetch_all(pool)
                .await?;

        let projects: HashMap<String, serde_json::Value> = projects
            .into_iter()
            .map(|p| Ok((p.id.to_string(), serde_json::to_value(&p).map_err(decode_err)?)))
            .collect::<Result<_, sqlx::Error>>()?;
        let users: HashMap<String, serde_json::Value> = users
            .into_iter()
            .map(|u| Ok((u.id.to_string(), serde_json::to_value(&u).map_err(decode_err)?)))
            .collect::<Result<_, sqlx::Error>>()?;

        let mut resolved = Vec::with_capacity(tasks.len());
        for task in tasks {
            let project_ref = task.project.clone();
            let assignee_ref = task.assigned_to.clone();
            let mut value = serde_json::to_value(&task).map_err(decode_err)?;
            if let Some(obj) = value.as_object_mut() {
                if let Some(id) = project_ref {
                    let embedded = projects.get(&id).cloned().unwrap_or(serde_json::Value::Null);
                    obj.insert("project".to_string(), embedded);
                }
                if let Some(id) = assignee_ref {
                    let embedded = users.get(&id).cloned().unwrap_or(serde_json::Value::Null);
                    obj.insert("assigned_to".to_string(), embedded);
                }
            }
            resolved.push(value);
        }
        Ok(resolved)
    }
}

fn decode_err(e: serde_json::Error) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(e))
}
