//! Query string extractors
//!
//! Typed query parameters for the task and ledger listing endpoints.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use gemdrop_core::{DomainError, TelegramId};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw parameters for GET /tasks
#[derive(Debug, Deserialize)]
struct TaskListParams {
    #[serde(default)]
    user_id: Option<i64>,
}

/// Query for the task listing endpoint
///
/// The caller id is optional; without it the listing carries no
/// completion records.
#[derive(Debug, Clone, Copy)]
pub struct TaskListQuery {
    pub user_id: Option<TelegramId>,
}

#[async_trait]
impl<S> FromRequestParts<S> for TaskListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<TaskListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(TaskListQuery {
            user_id: params.user_id.map(TelegramId::new),
        })
    }
}

/// Raw parameters for GET /transactions
#[derive(Debug, Deserialize)]
struct LedgerParams {
    #[serde(default)]
    user_id: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
}

/// Query for the ledger listing endpoint
///
/// user_id is required; the limit is clamped by the service.
#[derive(Debug, Clone, Copy)]
pub struct LedgerQuery {
    pub user_id: TelegramId,
    pub limit: Option<i64>,
}

#[async_trait]
impl<S> FromRequestParts<S> for LedgerQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<LedgerParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let user_id = params
            .user_id
            .map(TelegramId::new)
            .ok_or(DomainError::MissingParameter("user_id"))?;

        Ok(LedgerQuery {
            user_id,
            limit: params.limit,
        })
    }
}
