//! Ledger module - bankroll balance reconciliation.

mod ledger_model;
mod ledger_service;
mod ledger_traits;
mod reconciler;


pub use ledger_model::{BalanceCheck, LedgerEntry};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
pub use reconciler::compute_current_balance;
