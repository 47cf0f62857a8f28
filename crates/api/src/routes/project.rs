use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Project routes, nested under `/projects`.
///
/// The literal segments (`new`, `all`, `view`, `edit`, `delete`) are
/// registered alongside the bare `/{id}` detail route; axum prefers the
/// static match, so `/projects/all` never shadows into `detail`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(project::create))
        .route("/all", get(project::list_mine))
        .route("/view/{id}", get(project::view))
        .route("/edit/{id}", put(project::edit))
        .route("/delete/{id}", delete(project::delete))
        .route("/{id}", get(project::detail))
}
