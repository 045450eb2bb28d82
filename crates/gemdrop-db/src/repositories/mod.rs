//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in gemdrop-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod task;
mod transaction;
mod user;
mod user_task;

pub use task::PgTaskRepository;
pub use transaction::PgTransactionRepository;
pub use user::PgUserRepository;
pub use user_task::PgUserTaskRepository;
