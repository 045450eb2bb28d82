//! Transaction handlers
//!
//! Read-only endpoint over the append-only ledger.

use axum::{extract::State, Json};
use gemdrop_service::{dto::TransactionsResponse, TransactionService};

use crate::extractors::LedgerQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// List a user's ledger entries, newest first
///
/// GET /transactions?user_id={id}&limit={n}
pub async fn list_transactions(
    State(state): State<AppState>,
    query: LedgerQuery,
) -> ApiResult<Json<TransactionsResponse>> {
    let service = TransactionService::new(state.service_context());
    let response = service
        .list_transactions(query.user_id, query.limit)
        .await?;
    Ok(Json(response))
}
