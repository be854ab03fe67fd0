pub mod goals;
pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /tasks                 task CRUD + completion transitions
/// /goals                 goal CRUD + task association
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tasks", tasks::router())
        .nest("/goals", goals::router())
}
