//! # gemdrop-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Currency, Task, Transaction, TransactionKind, TransactionStatus, User, UserTask,
    UserTaskStatus, VerificationType,
};
pub use error::DomainError;
pub use traits::{
    RepoResult, TaskRepository, TransactionRepository, UserRepository, UserTaskRepository,
};
pub use value_objects::{
    diamonds_to_tons, referral_bonus, tons_to_diamonds, Snowflake, SnowflakeGenerator,
    SnowflakeParseError, TelegramId, TelegramIdParseError, DIAMONDS_PER_TON,
    REFERRAL_BONUS_PERCENT,
};
