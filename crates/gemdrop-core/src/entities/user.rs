//! User entity - a Telegram account enrolled in the reward program

use chrono::{DateTime, Utc};

use crate::value_objects::{diamonds_to_tons, TelegramId};

/// User account keyed by Telegram id
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub telegram_id: TelegramId,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Integer diamond balance, the single source of truth for funds
    pub diamonds: i64,
    /// Withdrawn / deposited TON balance, tracked separately from diamonds
    pub tons: f64,
    /// Telegram id of the user who referred this one, if any
    pub referrer_id: Option<TelegramId>,
    /// Telegram ids of users this one referred
    pub referrals: Vec<TelegramId>,
    pub is_banned: bool,
    pub wallet_address: Option<String>,
    pub wallet_connected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
}

impl User {
    /// Register a new user with a zero balance
    #[must_use]
    pub fn register(
        telegram_id: TelegramId,
        username: Option<String>,
        first_name: String,
        last_name: Option<String>,
        referrer_id: Option<TelegramId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            telegram_id,
            username,
            first_name,
            last_name,
            diamonds: 0,
            tons: 0.0,
            referrer_id,
            referrals: Vec::new(),
            is_banned: false,
            wallet_address: None,
            wallet_connected_at: None,
            created_at: now,
            last_active: now,
        }
    }

    /// Diamond balance expressed in TON at the fixed rate
    #[inline]
    #[must_use]
    pub fn diamonds_as_tons(&self) -> f64 {
        diamonds_to_tons(self.diamonds)
    }

    /// Display name: username if set, first name otherwise
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }

    /// Check whether a TON wallet has been linked
    #[inline]
    #[must_use]
    pub fn has_wallet(&self) -> bool {
        self.wallet_address.is_some()
    }

    /// Link a TON wallet address
    pub fn connect_wallet(&mut self, address: String) {
        self.wallet_address = Some(address);
        self.wallet_connected_at = Some(Utc::now());
        self.last_active = Utc::now();
    }
}
