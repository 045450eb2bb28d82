//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, tasks, transactions, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(task_routes())
        .merge(user_routes())
        .merge(transaction_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/telegram", post(auth::telegram_auth))
}

/// Task routes
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list_tasks))
        .route("/tasks/complete", post(tasks::complete_task))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/wallet", post(users::connect_wallet))
        .route("/users/:telegram_id", get(users::get_user))
}

/// Transaction routes
fn transaction_routes() -> Router<AppState> {
    Router::new().route("/transactions", get(transactions::list_transactions))
}
