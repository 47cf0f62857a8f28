//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where applicable, a `Deserialize` update DTO (all `Option` fields)

pub mod invitation;
pub mod project;
pub mod task;
pub mod user;
