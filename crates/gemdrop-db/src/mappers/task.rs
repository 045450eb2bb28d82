//! Task entity <-> model mapper

use gemdrop_core::entities::Task;
use gemdrop_core::error::DomainError;
use gemdrop_core::value_objects::Snowflake;

use crate::models::TaskModel;

/// Convert TaskModel to Task entity, parsing the stored verification type
impl TryFrom<TaskModel> for Task {
    type Error = DomainError;

    fn try_from(model: TaskModel) -> Result<Self, Self::Error> {
        Ok(Task {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            reward: model.reward,
            url: model.url,
            verification_type: model
                .verification_type
                .parse()
                .map_err(DomainError::InternalError)?,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
