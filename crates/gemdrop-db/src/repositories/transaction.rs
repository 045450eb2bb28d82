//! PostgreSQL implementation of TransactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gemdrop_core::entities::Transaction;
use gemdrop_core::traits::{RepoResult, TransactionRepository};
use gemdrop_core::value_objects::TelegramId;

use crate::models::TransactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TransactionRepository
#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    /// Create a new PgTransactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    #[instrument(skip(self, transaction), fields(id = %transaction.id, user_id = %transaction.user_id))]
    async fn create(&self, transaction: &Transaction) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO transactions (id, user_id, kind, amount, currency, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(transaction.id.into_inner())
        .bind(transaction.user_id.into_inner())
        .bind(transaction.kind.as_str())
        .bind(transaction.amount)
        .bind(transaction.currency.as_str())
        .bind(transaction.status.as_str())
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_by_user(&self, user_id: TelegramId, limit: i64) -> RepoResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionModel>(
            r"
            SELECT id, user_id, kind, amount, currency, status, created_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Transaction::try_from).collect()
    }
}
