//! Task entity model and request DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// A row from the `tasks` table.
///
/// `completed_at` is the completion marker: `NULL` means incomplete.
/// `goal_id` is only ever written through the goal association endpoint,
/// never by the task endpoints themselves.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed_at: Option<Timestamp>,
    pub goal_id: Option<DbId>,
}

impl Task {
    /// Whether the task carries a completion timestamp.
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Body for `POST /tasks`.
///
/// Fields are optional so the handler can reject incomplete payloads with
/// a 400 instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Body for `PUT /tasks/{id}`. Both fields are required by the handler;
/// `completed_at` and `goal_id` are never touched by an update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
}
