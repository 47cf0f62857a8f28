//! Invitation entity model (collaborator reference target).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DocId, Timestamp};

/// An invitation row from the `invitations` table.
///
/// Referenced by id from `Project.collaborators`; only the `{email, name}`
/// projection is ever exposed through the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invitation {
    #[sqlx(try_from = "String")]
    pub id: DocId,
    pub email: String,
    pub name: String,
    pub project: Option<String>,
    pub created_at: Timestamp,
}

/// Lightweight collaborator projection for the detailed project view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CollaboratorProfile {
    pub email: String,
    pub name: String,
}

/// DTO for creating an invitation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvitation {
    pub email: String,
    pub name: String,
    pub project: Option<String>,
}
