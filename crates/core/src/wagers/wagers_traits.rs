//! Wager repository and service traits.
//!
//! Every write reconciles the owning bankroll inside the same unit of work,
//! so each write method hands back the bankroll balance it committed.

use async_trait::async_trait;

use super::wagers_model::{NewWager, Wager, WagerOutcome, WagerUpdate, WagerWriteResult};
use crate::context::OwnerContext;
use crate::errors::Result;

/// Trait defining the contract for Wager repository operations.
///
/// Implementations must reject ids that do not belong to the acting owner
/// with `Error::NotFound`, and must never leave a wager write visible
/// without the matching bankroll balance.
#[async_trait]
pub trait WagerRepositoryTrait: Send + Sync {
    /// Inserts a wager and reconciles its bankroll.
    async fn create(&self, ctx: &OwnerContext, new_wager: NewWager) -> Result<WagerWriteResult>;

    /// Applies an update to a stored wager and reconciles its bankroll.
    async fn update(&self, ctx: &OwnerContext, update: WagerUpdate) -> Result<WagerWriteResult>;

    /// Deletes a wager and reconciles its bankroll.
    ///
    /// The returned wager is the row as it was before deletion.
    async fn delete(&self, ctx: &OwnerContext, wager_id: &str) -> Result<WagerWriteResult>;

    /// Retrieves a wager by its ID.
    fn get_by_id(&self, ctx: &OwnerContext, wager_id: &str) -> Result<Wager>;
}

/// Trait defining the contract for Wager service operations.
#[async_trait]
pub trait WagerServiceTrait: Send + Sync {
    /// Validates and records a new wager.
    async fn create_wager(&self, ctx: &OwnerContext, new_wager: NewWager)
        -> Result<WagerWriteResult>;

    /// Moves a wager to a new outcome, settling or reopening it.
    async fn update_wager_outcome(
        &self,
        ctx: &OwnerContext,
        wager_id: &str,
        outcome: WagerOutcome,
    ) -> Result<WagerWriteResult>;

    /// Edits stake, odds, note, date or outcome of a wager.
    async fn update_wager(&self, ctx: &OwnerContext, update: WagerUpdate)
        -> Result<WagerWriteResult>;

    async fn delete_wager(&self, ctx: &OwnerContext, wager_id: &str) -> Result<WagerWriteResult>;

    fn get_wager(&self, ctx: &OwnerContext, wager_id: &str) -> Result<Wager>;
}
