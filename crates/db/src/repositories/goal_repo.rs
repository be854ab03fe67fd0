//! Repository for the `goals` table and the goal→tasks association.

use taskboard_core::types::DbId;

use crate::models::goal::Goal;
use crate::DbPool;

/// Column list for `goals` queries.
const COLUMNS: &str = "id, title";

/// Outcome of a batch task assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignTasksOutcome {
    /// Every task id resolved and the associations were committed.
    Assigned,
    /// This task id matched no row; nothing was committed.
    UnknownTask(DbId),
}

/// Provides data access for goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a new goal.
    pub async fn create(pool: &DbPool, title: &str) -> Result<Goal, sqlx::Error> {
        let query = format!("INSERT INTO goals (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Goal>(&query)
            .bind(title)
            .fetch_one(pool)
            .await
    }

    /// List all goals in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals ORDER BY id");
        sqlx::query_as::<_, Goal>(&query).fetch_all(pool).await
    }

    /// Look up a goal by id. Returns `None` when no row exists.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite `title`. Returns the updated row, or `None` when the goal
    /// no longer exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        title: &str,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("UPDATE goals SET title = $1 WHERE id = $2 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Goal>(&query)
            .bind(title)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal, first releasing its tasks (`goal_id` → `NULL`).
    ///
    /// The nullify runs in the same transaction as the delete so orphaned
    /// tasks never carry a dangling reference, regardless of whether the
    /// connection enforces foreign keys. Returns `true` when a row was
    /// removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE tasks SET goal_id = NULL WHERE goal_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Associate every task in `task_ids` with the goal, all-or-nothing.
    ///
    /// A single unknown task id aborts the transaction and reports
    /// [`AssignTasksOutcome::UnknownTask`] with no partial state change.
    /// Re-association overwrites any prior goal (last-write-wins).
    pub async fn assign_tasks(
        pool: &DbPool,
        goal_id: DbId,
        task_ids: &[DbId],
    ) -> Result<AssignTasksOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for &task_id in task_ids {
            let result = sqlx::query("UPDATE tasks SET goal_id = $1 WHERE id = $2")
                .bind(goal_id)
                .bind(task_id)
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() == 0 {
                // Dropping the transaction rolls back prior updates.
                return Ok(AssignTasksOutcome::UnknownTask(task_id));
            }
        }

        tx.commit().await?;
        Ok(AssignTasksOutcome::Assigned)
    }
}
