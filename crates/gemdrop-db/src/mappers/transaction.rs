//! Transaction entity <-> model mapper

use gemdrop_core::entities::Transaction;
use gemdrop_core::error::DomainError;
use gemdrop_core::value_objects::{Snowflake, TelegramId};

use crate::models::TransactionModel;

/// Convert TransactionModel to Transaction entity, parsing the stored
/// kind, currency, and status strings
impl TryFrom<TransactionModel> for Transaction {
    type Error = DomainError;

    fn try_from(model: TransactionModel) -> Result<Self, Self::Error> {
        Ok(Transaction {
            id: Snowflake::new(model.id),
            user_id: TelegramId::new(model.user_id),
            kind: model.kind.parse().map_err(DomainError::InternalError)?,
            amount: model.amount,
            currency: model.currency.parse().map_err(DomainError::InternalError)?,
            status: model.status.parse().map_err(DomainError::InternalError)?,
            created_at: model.created_at,
        })
    }
}
