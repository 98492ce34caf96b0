//! SQLite storage implementation for the Stakebook ledger.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `stakebook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single writer actor every write goes through
//! - Repository implementations for bankrolls, wagers, ledger and queries
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//!
//! ```text
//!   core (domain, traits)
//!          │
//!          ▼
//!   storage-sqlite (this crate) ──► writer actor ──► SQLite DB
//!          │                                          ▲
//!          └────────── pooled read connections ───────┘
//! ```

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod bankrolls;
pub mod ledger;
pub mod queries;
pub mod wagers;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use bankrolls::BankrollRepository;
pub use ledger::LedgerRepository;
pub use queries::QueryRepository;
pub use wagers::WagerRepository;

// Re-export from stakebook-core for convenience
pub use stakebook_core::errors::{DatabaseError, Error, Result};
