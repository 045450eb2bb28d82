//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gemdrop_core::entities::User;
use gemdrop_core::error::DomainError;
use gemdrop_core::traits::{RepoResult, UserRepository};
use gemdrop_core::value_objects::TelegramId;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_telegram_id(&self, id: TelegramId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT telegram_id, username, first_name, last_name, diamonds, tons,
                   referrer_id, referrals, is_banned, wallet_address,
                   wallet_connected_at, created_at, last_active
            FROM users
            WHERE telegram_id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self, user), fields(telegram_id = %user.telegram_id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (telegram_id, username, first_name, last_name, diamonds, tons,
                               referrer_id, referrals, is_banned, created_at, last_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(user.telegram_id.into_inner())
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.diamonds)
        .bind(user.tons)
        .bind(user.referrer_id.map(TelegramId::into_inner))
        .bind(
            user.referrals
                .iter()
                .copied()
                .map(TelegramId::into_inner)
                .collect::<Vec<i64>>(),
        )
        .bind(user.is_banned)
        .bind(user.created_at)
        .bind(user.last_active)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists(user.telegram_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn touch_last_active(&self, id: TelegramId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET last_active = NOW()
            WHERE telegram_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn add_referral(
        &self,
        referrer_id: TelegramId,
        referred_id: TelegramId,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET referrals = array_append(referrals, $2)
            WHERE telegram_id = $1 AND NOT ($2 = ANY(referrals))
            ",
        )
        .bind(referrer_id.into_inner())
        .bind(referred_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn increment_diamonds(&self, id: TelegramId, amount: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET diamonds = diamonds + $2
            WHERE telegram_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(amount)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, address))]
    async fn connect_wallet(&self, id: TelegramId, address: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET wallet_address = $2, wallet_connected_at = NOW(), last_active = NOW()
            WHERE telegram_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(address)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
