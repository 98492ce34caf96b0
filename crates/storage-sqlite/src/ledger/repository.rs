//! Balance reconciliation against committed wager rows.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::bankrolls::load_owned_bankroll;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{bankrolls, wagers};
use crate::utils::{decimal_to_column, parse_decimal_column};
use stakebook_core::context::OwnerContext;
use stakebook_core::errors::{Error, Result};
use stakebook_core::ledger::{compute_current_balance, BalanceCheck, LedgerEntry, LedgerRepositoryTrait};
use stakebook_core::wagers::WagerOutcome;

/// Recomputes a bankroll balance from its wager rows.
fn computed_balance(
    conn: &mut SqliteConnection,
    owner_id: &str,
    bankroll_id: &str,
    initial_balance: Decimal,
) -> Result<Decimal> {
    let rows = wagers::table
        .filter(wagers::bankroll_id.eq(bankroll_id))
        .filter(wagers::owner_id.eq(owner_id))
        .filter(wagers::outcome.ne(WagerOutcome::Open.as_str()))
        .select((wagers::outcome, wagers::profit))
        .load::<(String, Option<String>)>(conn)
        .into_core()?;

    let mut entries = Vec::with_capacity(rows.len());
    for (outcome, profit) in rows {
        entries.push(LedgerEntry::new(
            outcome.parse::<WagerOutcome>()?,
            profit
                .map(|p| parse_decimal_column(&p, "profit"))
                .transpose()?,
        ));
    }
    compute_current_balance(initial_balance, entries)
}

/// Recomputes and stores a bankroll balance on the given connection.
///
/// Write paths call this on the writer's connection inside the transaction
/// that changed the wagers, so the balance and the rows commit together.
pub(crate) fn reconcile_in_transaction(
    conn: &mut SqliteConnection,
    owner_id: &str,
    bankroll_id: &str,
) -> Result<Decimal> {
    let bankroll = load_owned_bankroll(conn, owner_id, bankroll_id)?;
    let initial = parse_decimal_column(&bankroll.initial_balance, "initial_balance")?;
    let balance = computed_balance(conn, owner_id, bankroll_id, initial)?;

    diesel::update(
        bankrolls::table
            .filter(bankrolls::id.eq(bankroll_id))
            .filter(bankrolls::owner_id.eq(owner_id)),
    )
    .set((
        bankrolls::current_balance.eq(decimal_to_column(balance)),
        bankrolls::updated_at.eq(chrono::Utc::now().naive_utc()),
    ))
    .execute(conn)
    .into_core()?;

    debug!("Bankroll {} balance set to {}", bankroll_id, balance);
    Ok(balance)
}

pub struct LedgerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    async fn reconcile(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Decimal> {
        let owner_id = ctx.owner_id().to_string();
        let bankroll_id = bankroll_id.to_string();
        self.writer
            .exec(move |conn| reconcile_in_transaction(conn, &owner_id, &bankroll_id))
            .await
    }

    fn verify(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<BalanceCheck> {
        let mut conn = get_connection(&self.pool)?;
        let owner_id = ctx.owner_id();

        // One read transaction so both numbers come from the same snapshot.
        conn.transaction::<_, StorageError, _>(|conn| {
            let bankroll = load_owned_bankroll(conn, owner_id, bankroll_id)?;
            let initial = parse_decimal_column(&bankroll.initial_balance, "initial_balance")?;
            let stored = parse_decimal_column(&bankroll.current_balance, "current_balance")?;
            let computed = computed_balance(conn, owner_id, bankroll_id, initial)?;
            Ok(BalanceCheck::new(bankroll_id, stored, computed))
        })
        .map_err(Error::from)
    }
}
