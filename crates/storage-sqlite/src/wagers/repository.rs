use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::WagerDB;
use crate::bankrolls::load_owned_bankroll;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::ledger::reconcile_in_transaction;
use crate::schema::wagers;
use stakebook_core::context::OwnerContext;
use stakebook_core::errors::{Error, Result};
use stakebook_core::wagers::{NewWager, Wager, WagerRepositoryTrait, WagerUpdate, WagerWriteResult};

fn load_owned_wager(conn: &mut SqliteConnection, owner_id: &str, wager_id: &str) -> Result<Wager> {
    let row = wagers::table
        .filter(wagers::id.eq(wager_id))
        .filter(wagers::owner_id.eq(owner_id))
        .select(WagerDB::as_select())
        .first::<WagerDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::not_found("Wager", wager_id))?;
    Wager::try_from(row)
}

/// Repository for recording wagers.
///
/// Each write is one writer-actor job: the wager row change and the
/// reconciliation of its bankroll commit or roll back together.
pub struct WagerRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WagerRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl WagerRepositoryTrait for WagerRepository {
    async fn create(&self, ctx: &OwnerContext, new_wager: NewWager) -> Result<WagerWriteResult> {
        let owner_id = ctx.owner_id().to_string();
        self.writer
            .exec(move |conn| {
                load_owned_bankroll(conn, &owner_id, &new_wager.bankroll_id)?;

                let now = chrono::Utc::now().naive_utc();
                let wager =
                    new_wager.into_wager(uuid::Uuid::now_v7().to_string(), &owner_id, now)?;

                diesel::insert_into(wagers::table)
                    .values(WagerDB::from(&wager))
                    .execute(conn)
                    .into_core()?;

                let bankroll_balance = reconcile_in_transaction(conn, &owner_id, &wager.bankroll_id)?;
                Ok(WagerWriteResult {
                    wager,
                    bankroll_balance,
                })
            })
            .await
    }

    async fn update(&self, ctx: &OwnerContext, update: WagerUpdate) -> Result<WagerWriteResult> {
        let owner_id = ctx.owner_id().to_string();
        self.writer
            .exec(move |conn| {
                let existing = load_owned_wager(conn, &owner_id, &update.id)?;
                let wager = update.apply_to(existing, chrono::Utc::now().naive_utc())?;

                diesel::update(
                    wagers::table
                        .filter(wagers::id.eq(&wager.id))
                        .filter(wagers::owner_id.eq(&owner_id)),
                )
                .set(&WagerDB::from(&wager))
                .execute(conn)
                .into_core()?;

                let bankroll_balance = reconcile_in_transaction(conn, &owner_id, &wager.bankroll_id)?;
                Ok(WagerWriteResult {
                    wager,
                    bankroll_balance,
                })
            })
            .await
    }

    async fn delete(&self, ctx: &OwnerContext, wager_id: &str) -> Result<WagerWriteResult> {
        let owner_id = ctx.owner_id().to_string();
        let wager_id = wager_id.to_string();
        self.writer
            .exec(move |conn| {
                let wager = load_owned_wager(conn, &owner_id, &wager_id)?;

                diesel::delete(
                    wagers::table
                        .filter(wagers::id.eq(&wager_id))
                        .filter(wagers::owner_id.eq(&owner_id)),
                )
                .execute(conn)
                .into_core()?;

                let bankroll_balance = reconcile_in_transaction(conn, &owner_id, &wager.bankroll_id)?;
                Ok(WagerWriteResult {
                    wager,
                    bankroll_balance,
                })
            })
            .await
    }

    fn get_by_id(&self, ctx: &OwnerContext, wager_id: &str) -> Result<Wager> {
        let mut conn = get_connection(&self.pool)?;
        load_owned_wager(&mut conn, ctx.owner_id(), wager_id)
    }
}
