//! Axum extractors for request handling
//!
//! Custom extractors for validation and query parameters.

mod query;
mod validated;

pub use query::{LedgerQuery, TaskListQuery};
pub use validated::ValidatedJson;
