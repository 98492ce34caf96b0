//! Stakebook Core - Domain entities, services, and traits.
//!
//! This crate contains the bankroll ledger engine: wager settlement,
//! bankroll balance reconciliation, and the read-side ledger queries.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod bankrolls;
pub mod constants;
pub mod context;
pub mod errors;
pub mod ledger;
pub mod queries;
pub mod wagers;

pub use context::OwnerContext;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
