//! PostgreSQL implementation of TaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gemdrop_core::entities::Task;
use gemdrop_core::traits::{RepoResult, TaskRepository};
use gemdrop_core::value_objects::Snowflake;

use crate::models::TaskModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TaskRepository
#[derive(Clone)]
pub struct PgTaskRepository {
    pool: PgPool,
}

impl PgTaskRepository {
    /// Create a new PgTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    #[instrument(skip(self))]
    async fn find_active_by_id(&self, id: Snowflake) -> RepoResult<Option<Task>> {
        let result = sqlx::query_as::<_, TaskModel>(
            r"
            SELECT id, title, description, reward, url, verification_type,
                   is_active, created_at
            FROM tasks
            WHERE id = $1 AND is_active = TRUE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Task::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskModel>(
            r"
            SELECT id, title, description, reward, url, verification_type,
                   is_active, created_at
            FROM tasks
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Task::try_from).collect()
    }

    #[instrument(skip(self, task), fields(task_id = %task.id))]
    async fn create(&self, task: &Task) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO tasks (id, title, description, reward, url, verification_type,
                               is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(task.id.into_inner())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.reward)
        .bind(&task.url)
        .bind(task.verification_type.as_str())
        .bind(task.is_active)
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE tasks
            SET is_active = $2
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
