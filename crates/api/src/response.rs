//! Shared response envelope types for API handlers.
//!
//! Use [`MessageResponse`] instead of ad-hoc `serde_json::json!` bodies for
//! the message-only success responses on delete endpoints.

use serde::Serialize;

/// Standard `{ "message": ... }` success envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
