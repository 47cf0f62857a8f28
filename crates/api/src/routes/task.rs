use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Task routes, nested under `/tasks`.
///
/// The unscoped and identity-scoped access paths interleave on this
/// router: `GET /` and the `update`/`delete` prefixed routes are open,
/// while `POST /`, `/mine`, and the method handlers on `/{id}` other than
/// GET require a bearer credential.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create_scoped))
        .route("/new", post(task::create))
        .route("/mine", get(task::list_mine))
        .route("/project/{project_id}", get(task::list_by_project))
        .route("/update/{id}", put(task::update))
        .route("/delete/{id}", delete(task::delete))
        .route(
            "/{id}",
            get(task::get_by_id)
                .put(task::update_scoped)
                .delete(task::delete_scoped),
        )
}
