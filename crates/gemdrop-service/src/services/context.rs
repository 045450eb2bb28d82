//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.
//! Repositories are held as trait objects so tests can substitute
//! in-memory implementations.

use std::sync::Arc;

use gemdrop_core::traits::{
    TaskRepository, TransactionRepository, UserRepository, UserTaskRepository,
};
use gemdrop_core::SnowflakeGenerator;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    task_repo: Arc<dyn TaskRepository>,
    user_task_repo: Arc<dyn UserTaskRepository>,
    transaction_repo: Arc<dyn TransactionRepository>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        task_repo: Arc<dyn TaskRepository>,
        user_task_repo: Arc<dyn UserTaskRepository>,
        transaction_repo: Arc<dyn TransactionRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            task_repo,
            user_task_repo,
            transaction_repo,
            snowflake_generator,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the task repository
    pub fn task_repo(&self) -> &dyn TaskRepository {
        self.task_repo.as_ref()
    }

    /// Get the user task repository
    pub fn user_task_repo(&self) -> &dyn UserTaskRepository {
        self.user_task_repo.as_ref()
    }

    /// Get the transaction repository
    pub fn transaction_repo(&self) -> &dyn TransactionRepository {
        self.transaction_repo.as_ref()
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> gemdrop_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    task_repo: Option<Arc<dyn TaskRepository>>,
    user_task_repo: Option<Arc<dyn UserTaskRepository>>,
    transaction_repo: Option<Arc<dyn TransactionRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            task_repo: None,
            user_task_repo: None,
            transaction_repo: None,
            snowflake_generator: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn task_repo(mut self, repo: Arc<dyn TaskRepository>) -> Self {
        self.task_repo = Some(repo);
        self
    }

    pub fn user_task_repo(mut self, repo: Arc<dyn UserTaskRepository>) -> Self {
        self.user_task_repo = Some(repo);
        self
    }

    pub fn transaction_repo(mut self, repo: Arc<dyn TransactionRepository>) -> Self {
        self.transaction_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.task_repo
                .ok_or_else(|| ServiceError::validation("task_repo is required"))?,
            self.user_task_repo
                .ok_or_else(|| ServiceError::validation("user_task_repo is required"))?,
            self.transaction_repo
                .ok_or_else(|| ServiceError::validation("transaction_repo is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
