//! PostgreSQL implementation of UserTaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gemdrop_core::entities::UserTask;
use gemdrop_core::error::DomainError;
use gemdrop_core::traits::{RepoResult, UserTaskRepository};
use gemdrop_core::value_objects::TelegramId;

use crate::models::UserTaskModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserTaskRepository
#[derive(Clone)]
pub struct PgUserTaskRepository {
    pool: PgPool,
}

impl PgUserTaskRepository {
    /// Create a new PgUserTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserTaskRepository for PgUserTaskRepository {
    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: TelegramId) -> RepoResult<Vec<UserTask>> {
        let rows = sqlx::query_as::<_, UserTaskModel>(
            r"
            SELECT user_id, task_id, status, completed_at, verified_at
            FROM user_tasks
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(UserTask::try_from).collect()
    }

    #[instrument(skip(self, record), fields(user_id = %record.user_id, task_id = %record.task_id))]
    async fn insert_completed(&self, record: &UserTask) -> RepoResult<()> {
        // The primary key on (user_id, task_id) makes this insert the
        // atomic claim on the reward: a second attempt hits the unique
        // violation instead of paying out twice.
        sqlx::query(
            r"
            INSERT INTO user_tasks (user_id, task_id, status, completed_at, verified_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(record.user_id.into_inner())
        .bind(record.task_id.into_inner())
        .bind(record.status.as_str())
        .bind(record.completed_at)
        .bind(record.verified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::TaskAlreadyCompleted {
                user_id: record.user_id,
                task_id: record.task_id,
            })
        })?;

        Ok(())
    }
}
