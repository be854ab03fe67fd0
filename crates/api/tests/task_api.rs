//! HTTP-level integration tests for the `/tasks` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch, post_json, put_json};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_returns_201(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/tasks",
        serde_json::json!({"title": "Wash dishes", "description": "daily"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["task"]["title"], "Wash dishes");
    assert_eq!(json["task"]["description"], "daily");
    assert_eq!(json["task"]["is_complete"], false);
    assert!(json["task"]["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_missing_field_returns_400_and_persists_nothing(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/tasks", serde_json::json!({"title": "x"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"], "Invalid data");

    let app = common::build_test_app(pool);
    let response = get(app, "/tasks").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tasks_empty_returns_empty_array(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/tasks").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tasks_sorts_by_title(pool: SqlitePool) {
    for (title, desc) in [("Banana", "b"), ("Apple", "a")] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": title, "description": desc}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/tasks?sort=asc").await).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Apple", "Banana"]);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/tasks?sort=desc").await).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Banana", "Apple"]);

    // Absent sort keeps insertion order.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/tasks").await).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Banana", "Apple"]);
}

// ---------------------------------------------------------------------------
// Get one
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_task_omits_goal_id_when_unassigned(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Solo", "description": "s"}),
        )
        .await,
    )
    .await;
    let id = created["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["task"]["title"], "Solo");
    assert!(
        json["task"].get("goal_id").is_none(),
        "goal_id must be omitted for unassigned tasks"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_task_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/tasks/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "task 999 not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_task_with_non_integer_id_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/tasks/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "task abc invalid");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_overwrites_title_and_description(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Old", "description": "old"}),
        )
        .await,
    )
    .await;
    let id = created["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/tasks/{id}"),
        serde_json::json!({"title": "New", "description": "new"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["task"]["title"], "New");
    assert_eq!(json["task"]["description"], "new");
    assert_eq!(json["task"]["is_complete"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_missing_field_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Keep", "description": "k"}),
        )
        .await,
    )
    .await;
    let id = created["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/tasks/{id}"),
        serde_json::json!({"title": "Only title"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The task is untouched.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/tasks/{id}")).await).await;
    assert_eq!(json["task"]["title"], "Keep");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_task_returns_confirmation(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Go away", "description": "g"}),
        )
        .await,
    )
    .await;
    let id = created["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["details"],
        format!("Task {id} \"Go away\" successfully deleted")
    );

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Completion transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_complete_then_incomplete_round_trips(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Toggle", "description": "t"}),
        )
        .await,
    )
    .await;
    let id = created["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch(app, &format!("/tasks/{id}/mark_complete")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["task"]["is_complete"], true);

    let app = common::build_test_app(pool);
    let response = patch(app, &format!("/tasks/{id}/mark_incomplete")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["task"]["is_complete"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unrecognized_status_token_returns_400_without_state_change(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/tasks",
            serde_json::json!({"title": "Stable", "description": "s"}),
        )
        .await,
    )
    .await;
    let id = created["task"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch(app, &format!("/tasks/{id}/mark_sideways")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/tasks/{id}")).await).await;
    assert_eq!(json["task"]["is_complete"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_complete_on_missing_task_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = patch(app, "/tasks/424242/mark_complete").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
