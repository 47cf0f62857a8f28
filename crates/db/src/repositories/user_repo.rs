//! Repository for the `users` table.

use sqlx::PgPool;
use taskboard_core::types::DocId;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, email, name, created_at";

/// Provides access to user rows backing assignee references.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user row, returning it.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(DocId::generate().as_str())
            .bind(&input.email)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: &DocId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id.as_str())
            .fetch_optional(pool)
            .await
    }
}
