//! User service
//!
//! Profile lookup and the wallet-connect flow.

use tracing::{info, instrument};

use gemdrop_core::error::DomainError;
use gemdrop_core::value_objects::TelegramId;

use crate::dto::{ConnectWalletRequest, UserDetailResponse, UserResponse, WalletConnectResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by Telegram id
    #[instrument(skip(self))]
    pub async fn get_user(&self, telegram_id: TelegramId) -> ServiceResult<UserDetailResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_telegram_id(telegram_id)
            .await?
            .ok_or(DomainError::UserNotFound(telegram_id))?;

        Ok(UserDetailResponse {
            user: UserResponse::from(&user),
        })
    }

    /// Link a TON wallet address to a user
    #[instrument(skip(self, request))]
    pub async fn connect_wallet(
        &self,
        request: ConnectWalletRequest,
    ) -> ServiceResult<WalletConnectResponse> {
        let telegram_id = request
            .telegram_id
            .map(TelegramId::new)
            .ok_or(DomainError::MissingParameter("telegram_id"))?;
        let wallet_address = request
            .wallet_address
            .as_deref()
            .ok_or(DomainError::MissingParameter("wallet_address"))?;

        let updated = self
            .ctx
            .user_repo()
            .connect_wallet(telegram_id, wallet_address)
            .await?;
        if !updated {
            return Err(DomainError::UserNotFound(telegram_id).into());
        }

        info!(%telegram_id, "Wallet connected");

        Ok(WalletConnectResponse::connected())
    }
}
