//! UserTask entity - per-user completion record for a task
//!
//! One row per (user, task) pair. Its uniqueness is what makes task
//! completion idempotent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Snowflake, TelegramId};

/// Completion state of a user's task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserTaskStatus {
    /// Started but not yet claimed
    #[default]
    Pending,
    /// Claimed and rewarded
    Completed,
    /// Confirmed by external verification
    Verified,
}

impl UserTaskStatus {
    /// Stable string form used for persistence
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Verified => "verified",
        }
    }
}

impl std::str::FromStr for UserTaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "verified" => Ok(Self::Verified),
            other => Err(format!("unknown user task status: {other}")),
        }
    }
}

/// Completion record linking a user to a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTask {
    pub user_id: TelegramId,
    pub task_id: Snowflake,
    pub status: UserTaskStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub verified_at: Option<DateTime<Utc>>,
}

impl UserTask {
    /// Create a record in the completed state
    #[must_use]
    pub fn completed(user_id: TelegramId, task_id: Snowflake) -> Self {
        Self {
            user_id,
            task_id,
            status: UserTaskStatus::Completed,
            completed_at: Some(Utc::now()),
            verified_at: None,
        }
    }

    /// Check whether the reward has been paid out
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(
            self.status,
            UserTaskStatus::Completed | UserTaskStatus::Verified
        )
    }
}
