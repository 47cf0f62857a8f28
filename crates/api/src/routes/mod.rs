pub mod health;
pub mod project;
pub mod task;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the application route tree (everything except the root-level
/// health check).
///
/// Route hierarchy:
///
/// ```text
/// /ws                              event listener WebSocket
///
/// /projects/new                    create (auth)
/// /projects/all                    list mine (auth)
/// /projects/view/{id}              public view (auth)
/// /projects/{id}                   detailed view (auth)
/// /projects/edit/{id}              partial update (auth)
/// /projects/delete/{id}            delete, admin only (auth)
///
/// /tasks/new                       create (unscoped)
/// /tasks/                          list (unscoped, ?expand=refs) | create scoped (auth)
/// /tasks/mine                      list mine (auth)
/// /tasks/{id}                      get (unscoped) | replace scoped (auth) | delete scoped (auth)
/// /tasks/update/{id}               replace (unscoped)
/// /tasks/delete/{id}               delete (unscoped)
/// /tasks/project/{project_id}      list by project (unscoped)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/projects", project::router())
        .nest("/tasks/", task::router())
}
