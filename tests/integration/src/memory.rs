//! In-memory repository implementations
//!
//! Backs service-level tests that exercise business rules without a
//! database. Semantics mirror the PostgreSQL repositories, including
//! the duplicate-completion rejection and the missing-row booleans.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use gemdrop_core::{
    DomainError, RepoResult, Snowflake, SnowflakeGenerator, Task, TaskRepository, TelegramId,
    Transaction, TransactionRepository, User, UserRepository, UserTask, UserTaskRepository,
};
use gemdrop_service::{ServiceContext, ServiceContextBuilder};

/// Shared in-memory store implementing all repository traits
#[derive(Default)]
pub struct MemoryRepos {
    users: Mutex<HashMap<TelegramId, User>>,
    tasks: Mutex<HashMap<Snowflake, Task>>,
    user_tasks: Mutex<HashMap<(TelegramId, Snowflake), UserTask>>,
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryRepos {
    /// Read a user's current stored state
    pub fn user(&self, id: TelegramId) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    /// Seed a task directly into the store
    pub fn insert_task(&self, task: Task) {
        self.tasks.lock().unwrap().insert(task.id, task);
    }

    /// Number of ledger entries for a user
    pub fn ledger_len(&self, id: TelegramId) -> usize {
        self.transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.user_id == id)
            .count()
    }
}

#[async_trait]
impl UserRepository for MemoryRepos {
    async fn find_by_telegram_id(&self, id: TelegramId) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.telegram_id) {
            return Err(DomainError::UserAlreadyExists(user.telegram_id));
        }
        users.insert(user.telegram_id, user.clone());
        Ok(())
    }

    async fn touch_last_active(&self, id: TelegramId) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.last_active = Utc::now();
        Ok(())
    }

    async fn add_referral(
        &self,
        referrer_id: TelegramId,
        referred_id: TelegramId,
    ) -> RepoResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&referrer_id) {
            Some(user) if !user.referrals.contains(&referred_id) => {
                user.referrals.push(referred_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn increment_diamonds(&self, id: TelegramId, amount: i64) -> RepoResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&id) {
            Some(user) => {
                user.diamonds += amount;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn connect_wallet(&self, id: TelegramId, address: &str) -> RepoResult<bool> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&id) {
            Some(user) => {
                user.wallet_address = Some(address.to_string());
                user.wallet_connected_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl TaskRepository for MemoryRepos {
    async fn find_active_by_id(&self, id: Snowflake) -> RepoResult<Option<Task>> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .get(&id)
            .filter(|t| t.is_active)
            .cloned())
    }

    async fn list_active(&self) -> RepoResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .tasks
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.is_active)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    async fn create(&self, task: &Task) -> RepoResult<()> {
        self.tasks.lock().unwrap().insert(task.id, task.clone());
        Ok(())
    }

    async fn set_active(&self, id: Snowflake, active: bool) -> RepoResult<bool> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.get_mut(&id) {
            Some(task) => {
                task.is_active = active;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl UserTaskRepository for MemoryRepos {
    async fn list_by_user(&self, user_id: TelegramId) -> RepoResult<Vec<UserTask>> {
        Ok(self
            .user_tasks
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_completed(&self, record: &UserTask) -> RepoResult<()> {
        // Mirror the foreign keys on the user_tasks table
        if !self.users.lock().unwrap().contains_key(&record.user_id) {
            return Err(DomainError::DatabaseError(
                "insert or update on table \"user_tasks\" violates foreign key constraint"
                    .to_string(),
            ));
        }
        if !self.tasks.lock().unwrap().contains_key(&record.task_id) {
            return Err(DomainError::DatabaseError(
                "insert or update on table \"user_tasks\" violates foreign key constraint"
                    .to_string(),
            ));
        }

        let mut records = self.user_tasks.lock().unwrap();
        let key = (record.user_id, record.task_id);
        if records.contains_key(&key) {
            return Err(DomainError::TaskAlreadyCompleted {
                user_id: record.user_id,
                task_id: record.task_id,
            });
        }
        records.insert(key, record.clone());
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for MemoryRepos {
    async fn create(&self, transaction: &Transaction) -> RepoResult<()> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: TelegramId, limit: i64) -> RepoResult<Vec<Transaction>> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| t.user_id == user_id)
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}

/// Build a service context over a fresh in-memory store
///
/// Returns the store too so tests can seed tasks and inspect state.
pub fn memory_context() -> (ServiceContext, Arc<MemoryRepos>) {
    let store = Arc::new(MemoryRepos::default());
    let ctx = ServiceContextBuilder::new()
        .user_repo(store.clone())
        .task_repo(store.clone())
        .user_task_repo(store.clone())
        .transaction_repo(store.clone())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .expect("in-memory context should build");
    (ctx, store)
}
