//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Task, Transaction, User, UserTask};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, TelegramId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by Telegram id
    async fn find_by_telegram_id(&self, id: TelegramId) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Bump the user's last_active timestamp
    async fn touch_last_active(&self, id: TelegramId) -> RepoResult<()>;

    /// Append a referred user to the referrer's referral list.
    /// Returns false if the referrer does not exist.
    async fn add_referral(&self, referrer_id: TelegramId, referred_id: TelegramId)
        -> RepoResult<bool>;

    /// Atomically credit diamonds to a user's balance.
    /// Returns false if the user does not exist.
    async fn increment_diamonds(&self, id: TelegramId, amount: i64) -> RepoResult<bool>;

    /// Link a TON wallet address to the user.
    /// Returns false if the user does not exist.
    async fn connect_wallet(&self, id: TelegramId, address: &str) -> RepoResult<bool>;
}

// ============================================================================
// Task Repository
// ============================================================================

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find an active task by ID (inactive tasks are treated as absent)
    async fn find_active_by_id(&self, id: Snowflake) -> RepoResult<Option<Task>>;

    /// List all active tasks, newest first
    async fn list_active(&self) -> RepoResult<Vec<Task>>;

    /// Create a new task
    async fn create(&self, task: &Task) -> RepoResult<()>;

    /// Publish or hide a task.
    /// Returns false if the task does not exist.
    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<bool>;
}

// ============================================================================
// UserTask Repository
// ============================================================================

#[async_trait]
pub trait UserTaskRepository: Send + Sync {
    /// List all completion records for a user
    async fn list_by_user(&self, user_id: TelegramId) -> RepoResult<Vec<UserTask>>;

    /// Insert a completed record. Fails with TaskAlreadyCompleted if a
    /// record for this (user, task) pair already exists.
    async fn insert_completed(&self, record: &UserTask) -> RepoResult<()>;
}

// ============================================================================
// Transaction Repository
// ============================================================================

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Append a ledger entry
    async fn create(&self, transaction: &Transaction) -> RepoResult<()>;

    /// List a user's ledger entries, newest first, capped at `limit`
    async fn list_by_user(&self, user_id: TelegramId, limit: i64) -> RepoResult<Vec<Transaction>>;
}
