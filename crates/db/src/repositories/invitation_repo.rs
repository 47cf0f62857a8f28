//! Repository for the `invitations` table.

use sqlx::PgPool;
use taskboard_core::types::DocId;

use crate::models::invitation::{CollaboratorProfile, CreateInvitation, Invitation};

const COLUMNS: &str = "id, email, name, project, created_at";

/// Provides access to invitation records referenced by `Project.collaborators`.
pub struct InvitationRepo;

impl InvitationRepo {
    /// Insert a new invitation, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInvitation) -> Result<Invitation, sqlx::Error> {
        let query = format!(
            "INSERT INTO invitations (id, email, name, project)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invitation>(&query)
            .bind(DocId::generate().as_str())
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.project)
            .fetch_one(pool)
            .await
    }

    /// Resolve invitation ids into `{email, name}` projections, preserving
    /// the input ordering. Ids that match no row are skipped.
    pub async fn find_profiles(
        pool: &PgPool,
        ids: &[String],
    ) -> Result<Vec<CollaboratorProfile>, sqlx::Error> {
        sqlx::query_as::<_, CollaboratorProfile>(
            "SELECT i.email, i.name
             FROM unnest($1::text[]) WITH ORDINALITY AS c(id, ord)
             JOIN invitations i ON i.id = c.id
             ORDER BY c.ord",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }
}
