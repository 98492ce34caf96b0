use log::{debug, info};
use std::sync::Arc;

use super::bankrolls_model::{Bankroll, BankrollUpdate, NewBankroll};
use super::bankrolls_traits::{BankrollRepositoryTrait, BankrollServiceTrait};
use crate::context::OwnerContext;
use crate::errors::Result;

/// Service for managing bankrolls
pub struct BankrollService {
    repository: Arc<dyn BankrollRepositoryTrait>,
}

impl BankrollService {
    /// Creates a new BankrollService instance
    pub fn new(repository: Arc<dyn BankrollRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl BankrollServiceTrait for BankrollService {
    async fn create_bankroll(
        &self,
        ctx: &OwnerContext,
        new_bankroll: NewBankroll,
    ) -> Result<Bankroll> {
        new_bankroll.validate()?;
        debug!(
            "Creating bankroll '{}' with initial balance {}",
            new_bankroll.name, new_bankroll.initial_balance
        );
        let bankroll = self.repository.create(ctx, new_bankroll).await?;
        info!("Created bankroll {} ({})", bankroll.id, bankroll.name);
        Ok(bankroll)
    }

    async fn rename_bankroll(
        &self,
        ctx: &OwnerContext,
        update: BankrollUpdate,
    ) -> Result<Bankroll> {
        update.validate()?;
        self.repository.update(ctx, update).await
    }

    async fn delete_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<()> {
        let removed = self.repository.delete(ctx, bankroll_id).await?;
        info!(
            "Deleted bankroll {} and {} wager(s)",
            bankroll_id, removed
        );
        Ok(())
    }

    fn get_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Bankroll> {
        self.repository.get_by_id(ctx, bankroll_id)
    }

    fn list_bankrolls(&self, ctx: &OwnerContext) -> Result<Vec<Bankroll>> {
        self.repository.list(ctx)
    }
}
