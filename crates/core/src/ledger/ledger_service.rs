use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::ledger_model::BalanceCheck;
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::context::OwnerContext;
use crate::errors::Result;

/// Service for on-demand reconciliation and drift checks
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn reconcile_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Decimal> {
        debug!("Reconciling bankroll {}", bankroll_id);
        let balance = self.repository.reconcile(ctx, bankroll_id).await?;
        info!("Bankroll {} reconciled at {}", bankroll_id, balance);
        Ok(balance)
    }

    fn verify_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<BalanceCheck> {
        let check = self.repository.verify(ctx, bankroll_id)?;
        if !check.is_consistent() {
            warn!(
                "Bankroll {} drifted: stored {} but wagers add up to {}",
                bankroll_id, check.stored_balance, check.computed_balance
            );
        }
        Ok(check)
    }
}
