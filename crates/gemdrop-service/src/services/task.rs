//! Task service
//!
//! Task listing and the reward payout path.

use tracing::{info, instrument, warn};

use gemdrop_core::entities::{Transaction, TransactionKind, UserTask};
use gemdrop_core::error::DomainError;
use gemdrop_core::value_objects::{referral_bonus, Snowflake, TelegramId};

use crate::dto::{CompleteTaskResponse, TaskResponse, TasksResponse, UserTaskResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Task service
pub struct TaskService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TaskService<'a> {
    /// Create a new TaskService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active tasks, with the caller's completion records if known
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, user_id: Option<TelegramId>) -> ServiceResult<TasksResponse> {
        let tasks = self.ctx.task_repo().list_active().await?;

        let user_tasks = match user_id {
            Some(id) => self.ctx.user_task_repo().list_by_user(id).await?,
            None => Vec::new(),
        };

        Ok(TasksResponse {
            tasks: tasks.iter().map(TaskResponse::from).collect(),
            user_tasks: user_tasks.iter().map(UserTaskResponse::from).collect(),
        })
    }

    /// Complete a task and pay out its reward
    ///
    /// The completion record insert is the commit point: its unique index
    /// guarantees a single payout per (user, task) pair even under
    /// concurrent requests. Writes after it are not rolled back on failure.
    #[instrument(skip(self))]
    pub async fn complete_task(
        &self,
        user_id: TelegramId,
        task_id: Snowflake,
    ) -> ServiceResult<CompleteTaskResponse> {
        let task = self
            .ctx
            .task_repo()
            .find_active_by_id(task_id)
            .await?
            .ok_or(DomainError::TaskNotFound(task_id))?;

        // The caller must be a registered user before the completion
        // record claims the reward.
        let user = self
            .ctx
            .user_repo()
            .find_by_telegram_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let record = UserTask::completed(user_id, task.id);
        self.ctx.user_task_repo().insert_completed(&record).await?;

        let credited = self
            .ctx
            .user_repo()
            .increment_diamonds(user_id, task.reward)
            .await?;
        if !credited {
            // The user row vanished between the lookup and the credit
            warn!(%user_id, %task_id, "completion recorded but no balance to credit");
        }

        if let Some(referrer_id) = user.referrer_id {
            self.pay_referral_bonus(referrer_id, task.reward).await?;
        }

        let tx = Transaction::diamonds(
            self.ctx.generate_id(),
            user_id,
            TransactionKind::TaskReward,
            task.reward,
        );
        self.ctx.transaction_repo().create(&tx).await?;

        info!(%user_id, %task_id, reward = task.reward, "Task completed");

        Ok(CompleteTaskResponse {
            reward: task.reward,
        })
    }

    /// Credit the referrer's share of a reward
    ///
    /// A zero bonus writes nothing; a missing referrer row skips both the
    /// credit and its ledger entry.
    async fn pay_referral_bonus(
        &self,
        referrer_id: TelegramId,
        reward: i64,
    ) -> ServiceResult<()> {
        let bonus = referral_bonus(reward);
        if bonus == 0 {
            return Ok(());
        }

        let credited = self
            .ctx
            .user_repo()
            .increment_diamonds(referrer_id, bonus)
            .await?;
        if !credited {
            return Ok(());
        }

        let tx = Transaction::diamonds(
            self.ctx.generate_id(),
            referrer_id,
            TransactionKind::ReferralBonus,
            bonus,
        );
        self.ctx.transaction_repo().create(&tx).await?;

        info!(%referrer_id, bonus, "Referral bonus credited");
        Ok(())
    }
}
