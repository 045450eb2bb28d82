//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Snowflake, TelegramId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(TelegramId),

    #[error("Task not found: {0}")]
    TaskNotFound(Snowflake),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Task {task_id} already completed by user {user_id}")]
    TaskAlreadyCompleted {
        user_id: TelegramId,
        task_id: Snowflake,
    },

    #[error("User already registered: {0}")]
    UserAlreadyExists(TelegramId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("User is banned")]
    UserBanned,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TaskNotFound(_) => "UNKNOWN_TASK",

            // Conflict
            Self::TaskAlreadyCompleted { .. } => "TASK_ALREADY_COMPLETED",
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingParameter(_) => "MISSING_PARAMETER",

            // Business Rules
            Self::UserBanned => "USER_BANNED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::TaskNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::TaskAlreadyCompleted { .. } | Self::UserAlreadyExists(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::MissingParameter(_))
    }
}
