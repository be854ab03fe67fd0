//! Goal entity model and request DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use taskboard_core::types::DbId;

/// A row from the `goals` table.
#[derive(Debug, Clone, FromRow)]
pub struct Goal {
    pub id: DbId,
    pub title: String,
}

/// Body for `POST /goals`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoal {
    pub title: Option<String>,
}

/// Body for `PUT /goals/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoal {
    pub title: Option<String>,
}

/// Body for `POST /goals/{id}/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTasks {
    pub task_ids: Option<Vec<DbId>>,
}
