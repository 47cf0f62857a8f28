//! User entity model (assignee reference target).
//!
//! Account lifecycle (registration, login, sessions) is handled by an
//! external service; this table only backs reference resolution.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DocId, Timestamp};

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    #[sqlx(try_from = "String")]
    pub id: DocId,
    pub email: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// Lightweight projection embedded when task assignee references are expanded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSummary {
    #[sqlx(try_from = "String")]
    pub id: DocId,
    pub email: String,
    pub name: String,
}

/// DTO for creating a user row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
}
