//! Transaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for transactions table
#[derive(Debug, Clone, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
