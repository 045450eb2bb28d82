//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod tasks;
pub mod transactions;
pub mod users;
