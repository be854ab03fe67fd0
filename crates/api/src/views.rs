//! Canonical JSON response shapes.
//!
//! Response DTOs own the wire format so row models stay free of
//! serialization concerns. `goal_id` is the one conditional field: it is
//! omitted entirely while a task is unassigned.

use serde::Serialize;
use taskboard_core::types::DbId;
use taskboard_db::models::goal::Goal;
use taskboard_db::models::task::Task;

/// Canonical task shape.
#[derive(Debug, Serialize)]
pub struct TaskBody {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<DbId>,
}

impl From<Task> for TaskBody {
    fn from(task: Task) -> Self {
        let is_complete = task.is_complete();
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            is_complete,
            goal_id: task.goal_id,
        }
    }
}

/// Canonical goal shape.
#[derive(Debug, Serialize)]
pub struct GoalBody {
    pub id: DbId,
    pub title: String,
}

impl From<Goal> for GoalBody {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            title: goal.title,
        }
    }
}

/// `{ "task": ... }` envelope for single-task responses.
#[derive(Debug, Serialize)]
pub struct TaskEnvelope {
    pub task: TaskBody,
}

/// `{ "goal": ... }` envelope for single-goal responses.
#[derive(Debug, Serialize)]
pub struct GoalEnvelope {
    pub goal: GoalBody,
}

/// Confirmation message for deletions.
#[derive(Debug, Serialize)]
pub struct Details {
    pub details: String,
}

/// Echo body for `POST /goals/{id}/tasks`; `task_ids` repeats the input
/// verbatim rather than re-reading final state.
#[derive(Debug, Serialize)]
pub struct AssignedTasks {
    pub id: DbId,
    pub task_ids: Vec<DbId>,
}

/// Body for `GET /goals/{id}/tasks`: the goal plus its full member tasks.
#[derive(Debug, Serialize)]
pub struct GoalWithTasks {
    pub id: DbId,
    pub title: String,
    pub tasks: Vec<TaskBody>,
}
