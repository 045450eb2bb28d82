//! Repository traits (ports)

mod repositories;

pub use repositories::{
    RepoResult, TaskRepository, TransactionRepository, UserRepository, UserTaskRepository,
};
