//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility;
//! Telegram ids are plain numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use gemdrop_core::entities::{Currency, TransactionKind, TransactionStatus, UserTaskStatus, VerificationType};

// ============================================================================
// User Responses
// ============================================================================

/// Full user profile response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub telegram_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub diamonds: i64,
    pub tons: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_id: Option<i64>,
    pub referrals: Vec<i64>,
    pub is_banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

/// Authentication response
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
}

/// Single-user lookup response
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailResponse {
    pub user: UserResponse,
}

/// Wallet connect confirmation
#[derive(Debug, Clone, Serialize)]
pub struct WalletConnectResponse {
    pub message: String,
}

impl WalletConnectResponse {
    pub fn connected() -> Self {
        Self {
            message: "Wallet connected".to_string(),
        }
    }
}

// ============================================================================
// Task Responses
// ============================================================================

/// Task response
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub verification_type: VerificationType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Per-user task completion record response
#[derive(Debug, Clone, Serialize)]
pub struct UserTaskResponse {
    pub user_id: i64,
    pub task_id: String,
    pub status: UserTaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,
}

/// Task listing response
#[derive(Debug, Clone, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<TaskResponse>,
    pub user_tasks: Vec<UserTaskResponse>,
}

/// Task completion response
#[derive(Debug, Clone, Serialize)]
pub struct CompleteTaskResponse {
    pub reward: i64,
}

// ============================================================================
// Transaction Responses
// ============================================================================

/// Ledger entry response
#[derive(Debug, Clone, Serialize)]
pub struct TransactionResponse {
    pub id: String,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: i64,
    pub currency: Currency,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

/// Transaction listing response
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
