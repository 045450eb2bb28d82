//! UserTask entity <-> model mapper

use gemdrop_core::entities::UserTask;
use gemdrop_core::error::DomainError;
use gemdrop_core::value_objects::{Snowflake, TelegramId};

use crate::models::UserTaskModel;

/// Convert UserTaskModel to UserTask entity, parsing the stored status
impl TryFrom<UserTaskModel> for UserTask {
    type Error = DomainError;

    fn try_from(model: UserTaskModel) -> Result<Self, Self::Error> {
        Ok(UserTask {
            user_id: TelegramId::new(model.user_id),
            task_id: Snowflake::new(model.task_id),
            status: model.status.parse().map_err(DomainError::InternalError)?,
            completed_at: model.completed_at,
            verified_at: model.verified_at,
        })
    }
}
