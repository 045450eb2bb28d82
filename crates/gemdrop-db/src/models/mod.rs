//! Database models - SQLx-compatible structs for PostgreSQL tables

mod task;
mod transaction;
mod user;
mod user_task;

pub use task::TaskModel;
pub use transaction::TransactionModel;
pub use user::UserModel;
pub use user_task::UserTaskModel;
