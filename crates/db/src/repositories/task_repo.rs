//! Repository for the `tasks` table.

use taskboard_core::types::{DbId, Timestamp};

use crate::models::task::Task;
use crate::DbPool;

/// Column list for `tasks` queries.
const COLUMNS: &str = "id, title, description, completed_at, goal_id";

/// Sort order for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrder {
    /// Insertion order (`ORDER BY id`), the documented natural order.
    Insertion,
    /// Title, lexicographically ascending.
    TitleAsc,
    /// Title, lexicographically descending.
    TitleDesc,
}

impl TaskOrder {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Insertion => "id",
            Self::TitleAsc => "title ASC",
            Self::TitleDesc => "title DESC",
        }
    }
}

/// Provides data access for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task. New tasks start incomplete and unassigned.
    pub async fn create(
        pool: &DbPool,
        title: &str,
        description: &str,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// List all tasks in the given order.
    pub async fn list(pool: &DbPool, order: TaskOrder) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY {}", order.as_sql());
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Look up a task by id. Returns `None` when no row exists.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite `title` and `description`. Returns the updated row, or
    /// `None` when the task no longer exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        title: &str,
        description: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET title = $1, description = $2 WHERE id = $3 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(title)
            .bind(description)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task. Returns `true` when a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set or clear the completion timestamp. Returns the updated row, or
    /// `None` when the task no longer exists.
    pub async fn set_completion(
        pool: &DbPool,
        id: DbId,
        completed_at: Option<Timestamp>,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query =
            format!("UPDATE tasks SET completed_at = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(completed_at)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tasks associated with a goal, in insertion order.
    pub async fn find_by_goal(pool: &DbPool, goal_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE goal_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }
}
