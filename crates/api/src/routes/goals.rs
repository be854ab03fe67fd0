//! Route definitions for the `/goals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::goal;
use crate::state::AppState;

/// Routes mounted at `/goals`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// POST   /{id}/tasks  -> assign_tasks (all-or-nothing)
/// GET    /{id}/tasks  -> list_tasks
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goal::list).post(goal::create))
        .route(
            "/{id}",
            get(goal::get_by_id).put(goal::update).delete(goal::delete),
        )
        .route(
            "/{id}/tasks",
            get(goal::list_tasks).post(goal::assign_tasks),
        )
}
