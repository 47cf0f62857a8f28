//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod invitation_repo;
pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub use invitation_repo::InvitationRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
