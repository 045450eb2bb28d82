//! Task entity - a reward-bearing action offered to users

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// How a task completion is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    /// Completion is accepted after the user opens the task URL
    #[default]
    UrlVisit,
    /// Completion requires membership in a Telegram channel or group
    TelegramJoin,
    /// Completion is reviewed by an operator
    Manual,
}

impl VerificationType {
    /// Stable string form used for persistence
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UrlVisit => "url_visit",
            Self::TelegramJoin => "telegram_join",
            Self::Manual => "manual",
        }
    }
}

impl std::str::FromStr for VerificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url_visit" => Ok(Self::UrlVisit),
            "telegram_join" => Ok(Self::TelegramJoin),
            "manual" => Ok(Self::Manual),
            other => Err(format!("unknown verification type: {other}")),
        }
    }
}

/// Task entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    /// Diamonds credited on completion
    pub reward: i64,
    /// Destination the client opens when the user starts the task
    pub url: Option<String>,
    pub verification_type: VerificationType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new active task
    #[must_use]
    pub fn new(
        id: Snowflake,
        title: String,
        description: String,
        reward: i64,
        url: Option<String>,
        verification_type: VerificationType,
    ) -> Self {
        Self {
            id,
            title,
            description,
            reward,
            url,
            verification_type,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Hide or publish the task
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
