//! Integration test utilities for the reward backend
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, plus in-memory repositories for service-level tests
//! that need no database.

pub mod helpers;
pub mod memory;

pub use fixtures::*;
pub use helpers::*;
pub use memory::*;
