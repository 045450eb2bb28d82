//! Entity to model mappers
//!
//! This module provides conversions between domain entities (gemdrop-core)
//! and database models.
//! - `From<Model> for Entity`: infallible row conversions
//! - `TryFrom<Model> for Entity`: conversions that parse stored enum strings

mod task;
mod transaction;
mod user;
mod user_task;
