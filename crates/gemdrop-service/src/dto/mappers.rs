//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use gemdrop_core::entities::{Task, Transaction, User, UserTask};
use gemdrop_core::value_objects::TelegramId;

use super::responses::{TaskResponse, TransactionResponse, UserResponse, UserTaskResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            telegram_id: user.telegram_id.into_inner(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            diamonds: user.diamonds,
            tons: user.tons,
            referrer_id: user.referrer_id.map(TelegramId::into_inner),
            referrals: user
                .referrals
                .iter()
                .copied()
                .map(TelegramId::into_inner)
                .collect(),
            is_banned: user.is_banned,
            wallet_address: user.wallet_address.clone(),
            created_at: user.created_at,
            last_active: user.last_active,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Task Mappers
// ============================================================================

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.title.clone(),
            description: task.description.clone(),
            reward: task.reward,
            url: task.url.clone(),
            verification_type: task.verification_type,
            is_active: task.is_active,
            created_at: task.created_at,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

impl From<&UserTask> for UserTaskResponse {
    fn from(record: &UserTask) -> Self {
        Self {
            user_id: record.user_id.into_inner(),
            task_id: record.task_id.to_string(),
            status: record.status,
            completed_at: record.completed_at,
            verified_at: record.verified_at,
        }
    }
}

impl From<UserTask> for UserTaskResponse {
    fn from(record: UserTask) -> Self {
        Self::from(&record)
    }
}

// ============================================================================
// Transaction Mappers
// ============================================================================

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            user_id: tx.user_id.into_inner(),
            kind: tx.kind,
            amount: tx.amount,
            currency: tx.currency,
            status: tx.status,
            created_at: tx.created_at,
        }
    }
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self::from(&tx)
    }
}
