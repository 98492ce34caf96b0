use log::{debug, info};
use std::sync::Arc;

use super::wagers_model::{NewWager, Wager, WagerOutcome, WagerUpdate, WagerWriteResult};
use super::wagers_traits::{WagerRepositoryTrait, WagerServiceTrait};
use crate::context::OwnerContext;
use crate::errors::Result;

/// Service for recording and settling wagers
pub struct WagerService {
    repository: Arc<dyn WagerRepositoryTrait>,
}

impl WagerService {
    pub fn new(repository: Arc<dyn WagerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl WagerServiceTrait for WagerService {
    async fn create_wager(
        &self,
        ctx: &OwnerContext,
        new_wager: NewWager,
    ) -> Result<WagerWriteResult> {
        new_wager.validate()?;
        debug!(
            "Creating wager in bankroll {} (stake {}, odds {}, outcome {})",
            new_wager.bankroll_id, new_wager.stake, new_wager.odds, new_wager.outcome
        );
        let result = self.repository.create(ctx, new_wager).await?;
        info!(
            "Recorded wager {}; bankroll {} balance is now {}",
            result.wager.id, result.wager.bankroll_id, result.bankroll_balance
        );
        Ok(result)
    }

    async fn update_wager_outcome(
        &self,
        ctx: &OwnerContext,
        wager_id: &str,
        outcome: WagerOutcome,
    ) -> Result<WagerWriteResult> {
        debug!("Setting outcome of wager {} to {}", wager_id, outcome);
        self.update_wager(ctx, WagerUpdate::outcome_only(wager_id, outcome))
            .await
    }

    async fn update_wager(
        &self,
        ctx: &OwnerContext,
        update: WagerUpdate,
    ) -> Result<WagerWriteResult> {
        update.validate()?;
        let result = self.repository.update(ctx, update).await?;
        info!(
            "Updated wager {} ({}); bankroll {} balance is now {}",
            result.wager.id, result.wager.outcome, result.wager.bankroll_id, result.bankroll_balance
        );
        Ok(result)
    }

    async fn delete_wager(&self, ctx: &OwnerContext, wager_id: &str) -> Result<WagerWriteResult> {
        let result = self.repository.delete(ctx, wager_id).await?;
        info!(
            "Deleted wager {}; bankroll {} balance is now {}",
            wager_id, result.wager.bankroll_id, result.bankroll_balance
        );
        Ok(result)
    }

    fn get_wager(&self, ctx: &OwnerContext, wager_id: &str) -> Result<Wager> {
        self.repository.get_by_id(ctx, wager_id)
    }
}
