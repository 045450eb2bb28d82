//! Value objects - immutable types that represent domain concepts

mod exchange;
mod snowflake;
mod telegram_id;

pub use exchange::{
    diamonds_to_tons, referral_bonus, tons_to_diamonds, DIAMONDS_PER_TON, REFERRAL_BONUS_PERCENT,
};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
pub use telegram_id::{TelegramId, TelegramIdParseError};
