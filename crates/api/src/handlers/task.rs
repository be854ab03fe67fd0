//! Handlers for the `/tasks` resource.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_db::models::task::{CreateTask, UpdateTask};
use taskboard_db::repositories::{TaskOrder, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::resolve;
use crate::state::AppState;
use crate::views::{Details, TaskBody, TaskEnvelope};

/// Query parameters for `GET /tasks`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    sort: Option<String>,
}

impl ListParams {
    /// `asc`/`desc` order by title; anything else keeps insertion order.
    fn order(&self) -> TaskOrder {
        match self.sort.as_deref() {
            Some("asc") => TaskOrder::TitleAsc,
            Some("desc") => TaskOrder::TitleDesc,
            _ => TaskOrder::Insertion,
        }
    }
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<TaskEnvelope>)> {
    let (Some(title), Some(description)) = (input.title, input.description) else {
        return Err(AppError::Core(CoreError::InvalidPayload));
    };

    let task = TaskRepo::create(&state.pool, &title, &description).await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskEnvelope { task: task.into() }),
    ))
}

/// GET /tasks?sort=asc|desc
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<TaskBody>>> {
    let tasks = TaskRepo::list(&state.pool, params.order()).await?;
    Ok(Json(tasks.into_iter().map(TaskBody::from).collect()))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<TaskEnvelope>> {
    let task = resolve::task(&state.pool, &raw_id).await?;
    Ok(Json(TaskEnvelope { task: task.into() }))
}

/// PUT /tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<TaskEnvelope>> {
    let task = resolve::task(&state.pool, &raw_id).await?;

    let (Some(title), Some(description)) = (input.title, input.description) else {
        return Err(AppError::Core(CoreError::InvalidPayload));
    };

    let task = TaskRepo::update(&state.pool, task.id, &title, &description)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task.id,
        }))?;
    Ok(Json(TaskEnvelope { task: task.into() }))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Details>> {
    let task = resolve::task(&state.pool, &raw_id).await?;
    TaskRepo::delete(&state.pool, task.id).await?;

    Ok(Json(Details {
        details: format!("Task {} \"{}\" successfully deleted", task.id, task.title),
    }))
}

/// PATCH /tasks/{id}/{status}
///
/// `mark_complete` stamps `completed_at` and fires the chat notification;
/// `mark_incomplete` clears the stamp. Any other token is rejected with
/// 400 before any state change.
pub async fn set_completion(
    State(state): State<AppState>,
    Path((raw_id, status)): Path<(String, String)>,
) -> AppResult<Json<TaskEnvelope>> {
    let task = resolve::task(&state.pool, &raw_id).await?;

    let completed_at = match status.as_str() {
        "mark_complete" => Some(Utc::now()),
        "mark_incomplete" => None,
        _ => return Err(AppError::Core(CoreError::InvalidPayload)),
    };

    let task = TaskRepo::set_completion(&state.pool, task.id, completed_at)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "task",
            id: task.id,
        }))?;

    if task.is_complete() {
        // Fire-and-forget: the response must not wait on the chat API, and
        // a delivery failure must not surface to the client.
        let notifier = Arc::clone(&state.notifier);
        let title = task.title.clone();
        tokio::spawn(async move {
            if let Err(err) = notifier.task_completed(&title).await {
                tracing::warn!(error = %err, title, "Task completion notification failed");
            }
        });
    }

    Ok(Json(TaskEnvelope { task: task.into() }))
}
