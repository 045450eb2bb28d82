//! Transaction service
//!
//! Read access to the append-only ledger.

use tracing::instrument;

use gemdrop_core::value_objects::TelegramId;

use crate::dto::{TransactionResponse, TransactionsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Default page size for transaction listings
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest page size a caller may request
pub const MAX_LIMIT: i64 = 100;

/// Transaction service
pub struct TransactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TransactionService<'a> {
    /// Create a new TransactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a user's ledger entries, newest first
    ///
    /// The limit defaults to 10 and is clamped to 1..=100.
    #[instrument(skip(self))]
    pub async fn list_transactions(
        &self,
        user_id: TelegramId,
        limit: Option<i64>,
    ) -> ServiceResult<TransactionsResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let transactions = self
            .ctx
            .transaction_repo()
            .list_by_user(user_id, limit)
            .await?;

        Ok(TransactionsResponse {
            transactions: transactions
                .iter()
                .map(TransactionResponse::from)
                .collect(),
        })
    }
}
