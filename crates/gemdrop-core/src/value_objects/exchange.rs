//! Currency exchange rules
//!
//! Diamonds are the integer-valued in-app currency; TON is the secondary
//! unit used for display and withdrawals. The rate is fixed: 100,000
//! diamonds = 1 TON. Stored balances are never rounded; rounding happens
//! only at display time.

/// Fixed exchange rate: diamonds per one TON.
pub const DIAMONDS_PER_TON: i64 = 100_000;

/// Referral bonus share, in percent of the referred user's task reward.
pub const REFERRAL_BONUS_PERCENT: i64 = 10;

/// Convert a diamond balance to its TON equivalent.
#[inline]
pub fn diamonds_to_tons(diamonds: i64) -> f64 {
    diamonds as f64 / DIAMONDS_PER_TON as f64
}

/// Convert a TON amount to diamonds.
#[inline]
pub fn tons_to_diamonds(tons: f64) -> i64 {
    (tons * DIAMONDS_PER_TON as f64) as i64
}

/// Compute the referrer's bonus for a task reward.
///
/// Truncates toward zero: a reward of 7 yields a bonus of 0, not 1.
#[inline]
pub fn referral_bonus(reward: i64) -> i64 {
    reward * REFERRAL_BONUS_PERCENT / 100
}
