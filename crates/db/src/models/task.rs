//! Task entity model and the open-document input DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::error::CoreError;
use taskboard_core::types::{DocId, Timestamp};

/// A task row from the `tasks` table.
///
/// Tasks are open documents: the three reference columns are pulled out for
/// filtering, all other caller-supplied fields live in `fields` and are
/// flattened back into the serialized object.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    #[sqlx(try_from = "String")]
    pub id: DocId,
    /// Project reference; may dangle.
    pub project: Option<String>,
    /// Assignee user reference; distinct from the owning identity.
    pub assigned_to: Option<String>,
    /// Owning identity, set by the identity-scoped creation path.
    #[serde(rename = "user")]
    pub user_id: Option<String>,
    #[sqlx(json)]
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Incoming task document: known references plus arbitrary extra fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskDocument {
    pub project: Option<String>,
    pub assigned_to: Option<String>,
    pub user: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl TaskDocument {
    /// Check that every reference present in the document is a well-formed
    /// 24-hex id. Run on create and re-run on replace.
    pub fn validate_refs(&self) -> Result<(), CoreError> {
        for (label, value) in [
            ("project", &self.project),
            ("assigned_to", &self.assigned_to),
            ("user", &self.user),
        ] {
            if let Some(v) = value {
                DocId::parse(v).map_err(|_| {
                    CoreError::Validation(format!("invalid {label} reference: {v}"))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_flatten_into_the_document() {
        let doc: TaskDocument = serde_json::from_str(
            r#"{"title": "x", "done": false, "project": "507f1f77bcf86cd799439011"}"#,
        )
        .unwrap();
        assert_eq!(doc.project.as_deref(), Some("507f1f77bcf86cd799439011"));
        assert_eq!(doc.fields["title"], "x");
        assert_eq!(doc.fields["done"], false);
        assert!(doc.user.is_none());
    }

    #[test]
    fn malformed_references_fail_validation() {
        let doc: TaskDocument =
            serde_json::from_str(r#"{"project": "not-an-id"}"#).unwrap();
        assert!(doc.validate_refs().is_err());

        let doc: TaskDocument = serde_json::from_str(r#"{"title": "no refs"}"#).unwrap();
        assert!(doc.validate_refs().is_ok());
    }
}
