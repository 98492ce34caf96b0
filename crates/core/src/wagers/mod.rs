//! Wagers module - settlement engine, domain models, services, and traits.

mod settlement;
mod wagers_model;
mod wagers_service;
mod wagers_traits;



// Re-export the public interface
pub use settlement::{payout, settle, Settlement};
pub use wagers_model::{
    parse_settlement_date, validate_odds, validate_stake, NewWager, Wager, WagerOutcome,
    WagerUpdate, WagerWriteResult,
};
pub use wagers_service::WagerService;
pub use wagers_traits::{WagerRepositoryTrait, WagerServiceTrait};
