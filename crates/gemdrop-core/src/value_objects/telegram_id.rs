//! Telegram user identifier
//!
//! Telegram assigns every account a numeric id; it is the natural key for
//! all user-facing operations in this system. Serialized as a JSON number,
//! which is what the Telegram WebApp hands to the client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric Telegram user id (unique, immutable once assigned)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TelegramId(i64);

impl TelegramId {
    /// Create a new TelegramId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation (e.g. a referral start parameter)
    pub fn parse(s: &str) -> Result<Self, TelegramIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(TelegramId)
            .map_err(|_| TelegramIdParseError::InvalidFormat)
    }
}

/// Error when parsing a TelegramId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TelegramIdParseError {
    #[error("invalid telegram id format")]
    InvalidFormat,
}

impl fmt::Display for TelegramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TelegramId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<TelegramId> for i64 {
    fn from(id: TelegramId) -> Self {
        id.0
    }
}

impl std::str::FromStr for TelegramId {
    type Err = TelegramIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TelegramId::parse(s)
    }
}
