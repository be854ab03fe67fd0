//! Repository layer. All SQL lives here; handlers never build queries.

mod goal_repo;
mod task_repo;

pub use goal_repo::{AssignTasksOutcome, GoalRepo};
pub use task_repo::{TaskOrder, TaskRepo};
