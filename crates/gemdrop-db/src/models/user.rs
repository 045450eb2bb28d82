//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub diamonds: i64,
    pub tons: f64,
    pub referrer_id: Option<i64>,
    pub referrals: Vec<i64>,
    pub is_banned: bool,
    pub wallet_address: Option<String>,
    pub wallet_connected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}
