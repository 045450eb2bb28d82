//! UserTask database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_tasks table
#[derive(Debug, Clone, FromRow)]
pub struct UserTaskModel {
    pub user_id: i64,
    pub task_id: i64,
    pub status: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub verified_at: Option<DateTime<Utc>>,
}
