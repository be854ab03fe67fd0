//! Path-parameter resolution: raw id strings to existing records.
//!
//! Every mutating or reading endpoint resolves its path id here first, so
//! a malformed id (400) or missing record (404) short-circuits before any
//! persistence mutation.

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::models::goal::Goal;
use taskboard_db::models::task::Task;
use taskboard_db::repositories::{GoalRepo, TaskRepo};
use taskboard_db::DbPool;

use crate::error::{AppError, AppResult};

/// Parse a raw path parameter as a database id.
fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse().map_err(|_| CoreError::InvalidIdentifier {
        entity,
        raw: raw.to_owned(),
    })
}

/// Resolve a task path parameter to an existing row.
pub async fn task(pool: &DbPool, raw: &str) -> AppResult<Task> {
    let id = parse_id("task", raw)?;
    TaskRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "task", id }))
}

/// Resolve a goal path parameter to an existing row.
pub async fn goal(pool: &DbPool, raw: &str) -> AppResult<Goal> {
    let id = parse_id("goal", raw)?;
    GoalRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "goal", id }))
}
