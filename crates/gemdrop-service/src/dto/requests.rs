//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

use gemdrop_core::Snowflake;

// ============================================================================
// Auth Requests
// ============================================================================

/// Identity payload handed over by the Telegram WebApp
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TelegramUserPayload {
    /// Numeric Telegram user id
    pub id: i64,

    #[validate(length(max = 64, message = "Username must be at most 64 characters"))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = 128, message = "First name must be 1-128 characters"))]
    pub first_name: String,

    #[validate(length(max = 128, message = "Last name must be at most 128 characters"))]
    pub last_name: Option<String>,
}

/// Telegram authentication request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TelegramAuthRequest {
    #[validate(nested)]
    pub user: TelegramUserPayload,

    /// Referral start parameter carried by the bot deep link
    pub start_param: Option<String>,
}

// ============================================================================
// Task Requests
// ============================================================================

/// Task completion request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CompleteTaskRequest {
    #[validate(range(min = 1, message = "user_id must be positive"))]
    pub user_id: i64,

    /// Task id, accepted as string or number
    pub task_id: Snowflake,
}

// ============================================================================
// Wallet Requests
// ============================================================================

/// Wallet connect request
///
/// Both fields are required; they stay optional here so the service can
/// report which one is missing instead of a generic parse failure.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct ConnectWalletRequest {
    pub telegram_id: Option<i64>,

    #[validate(length(min = 1, max = 128, message = "Wallet address must be 1-128 characters"))]
    pub wallet_address: Option<String>,
}
