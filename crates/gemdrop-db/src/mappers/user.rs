//! User entity <-> model mapper

use gemdrop_core::entities::User;
use gemdrop_core::value_objects::TelegramId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            telegram_id: TelegramId::new(model.telegram_id),
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            diamonds: model.diamonds,
            tons: model.tons,
            referrer_id: model.referrer_id.map(TelegramId::new),
            referrals: model.referrals.into_iter().map(TelegramId::new).collect(),
            is_banned: model.is_banned,
            wallet_address: model.wallet_address,
            wallet_connected_at: model.wallet_connected_at,
            created_at: model.created_at,
            last_active: model.last_active,
        }
    }
}
