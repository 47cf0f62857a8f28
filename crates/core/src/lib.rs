//! Shared domain vocabulary for the taskboard backend.
//!
//! This crate is intentionally free of HTTP and database dependencies.
//! It provides:
//!
//! - [`error::CoreError`] — the domain error taxonomy.
//! - [`types::DocId`] — the 24-hex document identifier used by every entity.
//! - [`project`] — project priority and status enumerations.
//! - [`time`] — lenient timestamp parsing for date inputs.

pub mod error;
pub mod project;
pub mod time;
pub mod types;
