//! Bankroll repository and service traits.

use async_trait::async_trait;

use super::bankrolls_model::{Bankroll, BankrollUpdate, NewBankroll};
use crate::context::OwnerContext;
use crate::errors::Result;

/// Trait defining the contract for Bankroll repository operations.
///
/// Every method is scoped to the acting owner. A bankroll owned by someone
/// else is reported as `Error::NotFound`.
#[async_trait]
pub trait BankrollRepositoryTrait: Send + Sync {
    /// Creates a bankroll whose current balance equals its initial balance.
    async fn create(&self, ctx: &OwnerContext, new_bankroll: NewBankroll) -> Result<Bankroll>;

    /// Renames a bankroll.
    async fn update(&self, ctx: &OwnerContext, update: BankrollUpdate) -> Result<Bankroll>;

    /// Deletes a bankroll together with all of its wagers.
    ///
    /// Returns the number of wagers removed.
    async fn delete(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<usize>;

    /// Retrieves a bankroll by its ID.
    fn get_by_id(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Bankroll>;

    /// Lists the owner's bankrolls ordered by name.
    fn list(&self, ctx: &OwnerContext) -> Result<Vec<Bankroll>>;
}

/// Trait defining the contract for Bankroll service operations.
#[async_trait]
pub trait BankrollServiceTrait: Send + Sync {
    async fn create_bankroll(
        &self,
        ctx: &OwnerContext,
        new_bankroll: NewBankroll,
    ) -> Result<Bankroll>;

    async fn rename_bankroll(&self, ctx: &OwnerContext, update: BankrollUpdate)
        -> Result<Bankroll>;

    /// Deletes a bankroll and every wager recorded against it.
    async fn delete_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<()>;

    fn get_bankroll(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Bankroll>;

    fn list_bankrolls(&self, ctx: &OwnerContext) -> Result<Vec<Bankroll>>;
}
