//! Domain error taxonomy shared across the workspace.

/// A domain-level error.
///
/// HTTP mapping lives in the api crate; repositories and domain code only
/// ever produce these variants (or `sqlx::Error`, wrapped at the api layer).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A valid identifier that matches no stored record.
    #[error("{entity} not found")]
    NotFound {
        /// Entity kind, e.g. `"Project"`.
        entity: &'static str,
        /// The identifier that was looked up.
        id: String,
    },

    /// An identifier that is not a 24-character hexadecimal string.
    /// Checked before any store access.
    #[error("Invalid project ID format")]
    InvalidId,

    /// A payload that fails a semantic validation rule.
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credential.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed to perform the operation.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
