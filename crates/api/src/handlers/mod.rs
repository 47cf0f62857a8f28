//! Request handlers for the project and task resources.
//!
//! Handlers delegate to the repositories in `taskboard_db` and map errors
//! via [`AppError`](crate::error::AppError). The task module additionally
//! publishes mutation events through the injected event bus.

pub mod project;
pub mod task;
