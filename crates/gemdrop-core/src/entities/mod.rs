//! Domain entities - core business objects

mod task;
mod transaction;
mod user;
mod user_task;

pub use task::{Task, VerificationType};
pub use transaction::{Currency, Transaction, TransactionKind, TransactionStatus};
pub use user::User;
pub use user_task::{UserTask, UserTaskStatus};
