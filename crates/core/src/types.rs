//! Core identifier and timestamp types.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A 24-character lowercase hexadecimal document identifier.
///
/// Generated store-side from a 4-byte UTC timestamp prefix plus 8 random
/// bytes, so ids sort roughly by creation time. Parsing rejects any string
/// that is not exactly 24 hex characters; mixed-case input is normalized
/// to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        let secs = chrono::Utc::now().timestamp() as u32;
        let tail: [u8; 8] = rand::rng().random();
        let tail_hex: String = tail.iter().map(|b| format!("{b:02x}")).collect();
        Self(format!("{secs:08x}{tail_hex}"))
    }

    /// Parse and normalize an identifier, rejecting malformed input.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(CoreError::InvalidId)
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DocId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
