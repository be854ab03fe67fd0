//! Handlers for the `/goals` resource, including task association.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_db::models::goal::{AssignTasks, CreateGoal, UpdateGoal};
use taskboard_db::repositories::{AssignTasksOutcome, GoalRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::resolve;
use crate::state::AppState;
use crate::views::{AssignedTasks, Details, GoalBody, GoalEnvelope, GoalWithTasks, TaskBody};

/// POST /goals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGoal>,
) -> AppResult<(StatusCode, Json<GoalEnvelope>)> {
    let Some(title) = input.title else {
        return Err(AppError::Core(CoreError::InvalidPayload));
    };

    let goal = GoalRepo::create(&state.pool, &title).await?;
    Ok((
        StatusCode::CREATED,
        Json(GoalEnvelope { goal: goal.into() }),
    ))
}

/// GET /goals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GoalBody>>> {
    let goals = GoalRepo::list(&state.pool).await?;
    Ok(Json(goals.into_iter().map(GoalBody::from).collect()))
}

/// GET /goals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<GoalEnvelope>> {
    let goal = resolve::goal(&state.pool, &raw_id).await?;
    Ok(Json(GoalEnvelope { goal: goal.into() }))
}

/// PUT /goals/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateGoal>,
) -> AppResult<Json<GoalEnvelope>> {
    let goal = resolve::goal(&state.pool, &raw_id).await?;

    let Some(title) = input.title else {
        return Err(AppError::Core(CoreError::InvalidPayload));
    };

    let goal = GoalRepo::update(&state.pool, goal.id, &title)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "goal",
            id: goal.id,
        }))?;
    Ok(Json(GoalEnvelope { goal: goal.into() }))
}

/// DELETE /goals/{id}
///
/// Member tasks survive the deletion: their `goal_id` is reset to `NULL`
/// in the same transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Details>> {
    let goal = resolve::goal(&state.pool, &raw_id).await?;
    GoalRepo::delete(&state.pool, goal.id).await?;

    Ok(Json(Details {
        details: format!("Goal {} \"{}\" successfully deleted", goal.id, goal.title),
    }))
}

/// POST /goals/{id}/tasks
///
/// All-or-nothing: one unknown task id fails the whole request with 404
/// and associates none of them. A body whose entries are not integer ids
/// is rejected with the documented 400, not the extractor's default.
pub async fn assign_tasks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<AssignTasks>, JsonRejection>,
) -> AppResult<Json<AssignedTasks>> {
    let goal = resolve::goal(&state.pool, &raw_id).await?;

    let Json(input) = payload.map_err(|_| CoreError::InvalidPayload)?;
    let Some(task_ids) = input.task_ids else {
        return Err(AppError::Core(CoreError::InvalidPayload));
    };

    match GoalRepo::assign_tasks(&state.pool, goal.id, &task_ids).await? {
        AssignTasksOutcome::UnknownTask(id) => {
            Err(AppError::Core(CoreError::NotFound { entity: "task", id }))
        }
        AssignTasksOutcome::Assigned => Ok(Json(AssignedTasks {
            id: goal.id,
            task_ids,
        })),
    }
}

/// GET /goals/{id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<GoalWithTasks>> {
    let goal = resolve::goal(&state.pool, &raw_id).await?;
    let tasks = TaskRepo::find_by_goal(&state.pool, goal.id).await?;

    Ok(Json(GoalWithTasks {
        id: goal.id,
        title: goal.title,
        tasks: tasks.into_iter().map(TaskBody::from).collect(),
    }))
}
