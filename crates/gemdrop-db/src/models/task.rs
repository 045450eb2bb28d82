//! Task database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for tasks table
#[derive(Debug, Clone, FromRow)]
pub struct TaskModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub reward: i64,
    pub url: Option<String>,
    pub verification_type: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
