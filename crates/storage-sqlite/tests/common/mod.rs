//! Shared setup for the SQLite integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use stakebook_core::bankrolls::{Bankroll, BankrollRepositoryTrait, NewBankroll};
use stakebook_core::context::OwnerContext;
use stakebook_core::wagers::{NewWager, WagerOutcome};
use stakebook_storage_sqlite::{
    create_pool, init, run_migrations, spawn_writer, BankrollRepository, DbPool,
    LedgerRepository, QueryRepository, WagerRepository, WriteHandle,
};

/// A migrated database in a temporary directory with every repository wired up.
pub struct TestStore {
    pub pool: Arc<DbPool>,
    pub writer: WriteHandle,
    pub bankrolls: BankrollRepository,
    pub wagers: WagerRepository,
    pub ledger: LedgerRepository,
    pub queries: QueryRepository,
    // Last, so the directory is removed after the connections close.
    _dir: TempDir,
}

/// Must be called from inside a Tokio runtime; the writer actor is spawned on it.
pub fn setup() -> TestStore {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("ledger.db");
    let db_path = init(db_path.to_str().expect("utf-8 path")).expect("init");
    let pool = create_pool(&db_path).expect("pool");
    run_migrations(&pool).expect("migrations");
    let writer = spawn_writer(pool.clone());

    TestStore {
        bankrolls: BankrollRepository::new(pool.clone(), writer.clone()),
        wagers: WagerRepository::new(pool.clone(), writer.clone()),
        ledger: LedgerRepository::new(pool.clone(), writer.clone()),
        queries: QueryRepository::new(pool.clone()),
        pool,
        writer,
        _dir: dir,
    }
}

pub fn owner(id: &str) -> OwnerContext {
    OwnerContext::new(id).expect("owner")
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

pub async fn bankroll(store: &TestStore, ctx: &OwnerContext, name: &str, initial: Decimal) -> Bankroll {
    store
        .bankrolls
        .create(
            ctx,
            NewBankroll {
                name: name.to_string(),
                initial_balance: initial,
            },
        )
        .await
        .expect("create bankroll")
}

pub fn new_wager(
    bankroll_id: &str,
    stake: Decimal,
    odds: Decimal,
    outcome: WagerOutcome,
    date: NaiveDate,
) -> NewWager {
    NewWager {
        bankroll_id: bankroll_id.to_string(),
        stake,
        odds,
        outcome,
        note: None,
        settlement_date: date,
    }
}
