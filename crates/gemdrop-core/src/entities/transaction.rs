//! Transaction entity - append-only ledger entry
//!
//! Every balance change is recorded here. Entries are never updated or
//! deleted; the ledger is the audit trail for user balances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Snowflake, TelegramId};

/// What caused the balance change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    TaskReward,
    ReferralBonus,
}

impl TransactionKind {
    /// Stable string form used for persistence
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::TaskReward => "task_reward",
            Self::ReferralBonus => "referral_bonus",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            "task_reward" => Ok(Self::TaskReward),
            "referral_bonus" => Ok(Self::ReferralBonus),
            other => Err(format!("unknown transaction kind: {other}")),
        }
    }
}

/// Currency the amount is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Currency {
    #[default]
    Diamonds,
    Tons,
}

impl Currency {
    /// Stable string form used for persistence
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diamonds => "diamonds",
            Self::Tons => "tons",
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "diamonds" => Ok(Self::Diamonds),
            "tons" => Ok(Self::Tons),
            other => Err(format!("unknown currency: {other}")),
        }
    }
}

/// Settlement state of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

impl TransactionStatus {
    /// Stable string form used for persistence
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(format!("unknown transaction status: {other}")),
        }
    }
}

/// Ledger entry
///
/// Amounts are integers in the entry's currency's smallest unit;
/// diamond entries carry whole diamonds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: Snowflake,
    pub user_id: TelegramId,
    pub kind: TransactionKind,
    pub amount: i64,
    pub currency: Currency,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a completed diamond-denominated entry
    #[must_use]
    pub fn diamonds(id: Snowflake, user_id: TelegramId, kind: TransactionKind, amount: i64) -> Self {
        Self {
            id,
            user_id,
            kind,
            amount,
            currency: Currency::Diamonds,
            status: TransactionStatus::Completed,
            created_at: Utc::now(),
        }
    }
}
