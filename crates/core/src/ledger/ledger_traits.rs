//! Ledger repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::ledger_model::BalanceCheck;
use crate::context::OwnerContext;
use crate::errors::Result;

/// Trait defining the contract for ledger persistence.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Recomputes the bankroll balance from committed wagers and stores it.
    ///
    /// Idempotent. Returns the stored balance.
    async fn reconcile(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Decimal>;

    /// Compares the stored balance with a fresh recomputation without writing.
    fn verify(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<BalanceCheck>;
}

/// Trait defining the contract for ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    async fn reconcile_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Decimal>;

    fn verify_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<BalanceCheck>;
}
