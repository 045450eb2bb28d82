//! Authentication service
//!
//! Resolves the Telegram identity handed over by the Mini App into a stored
//! user account, creating it on first contact and linking the referral.

use tracing::{debug, info, instrument};

use gemdrop_core::entities::User;
use gemdrop_core::value_objects::TelegramId;

use crate::dto::{AuthResponse, TelegramAuthRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve or create the user for a Telegram identity
    ///
    /// Returning users get only a last_active bump. New users are created
    /// with a zero balance; a parseable start_param becomes the referrer
    /// link, and the new user's id is appended to the referrer's list.
    #[instrument(skip(self, request), fields(telegram_id = request.user.id))]
    pub async fn authenticate(&self, request: TelegramAuthRequest) -> ServiceResult<AuthResponse> {
        let telegram_id = TelegramId::new(request.user.id);

        if let Some(user) = self
            .ctx
            .user_repo()
            .find_by_telegram_id(telegram_id)
            .await?
        {
            self.ctx.user_repo().touch_last_active(telegram_id).await?;
            return Ok(AuthResponse {
                user: UserResponse::from(&user),
            });
        }

        // A start_param naming the user itself is ignored
        let referrer_id = request
            .start_param
            .as_deref()
            .and_then(|s| TelegramId::parse(s).ok())
            .filter(|id| *id != telegram_id);

        let user = User::register(
            telegram_id,
            request.user.username,
            request.user.first_name,
            request.user.last_name,
            referrer_id,
        );
        self.ctx.user_repo().create(&user).await?;

        if let Some(referrer_id) = referrer_id {
            // Best effort: a dangling referrer is not an error
            let added = self
                .ctx
                .user_repo()
                .add_referral(referrer_id, telegram_id)
                .await?;
            if !added {
                debug!(%referrer_id, "referrer not found, referral link skipped");
            }
        }

        info!(%telegram_id, referrer = ?referrer_id, "New user registered");

        Ok(AuthResponse {
            user: UserResponse::from(&user),
        })
    }
}
