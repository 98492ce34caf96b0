use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::model::BankrollDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{bankrolls, wagers};
use stakebook_core::bankrolls::{Bankroll, BankrollRepositoryTrait, BankrollUpdate, NewBankroll};
use stakebook_core::context::OwnerContext;
use stakebook_core::errors::{Error, Result};

/// Loads a bankroll row, scoped to its owner.
///
/// A bankroll owned by someone else is reported exactly like a missing one.
pub(crate) fn load_owned_bankroll(
    conn: &mut SqliteConnection,
    owner_id: &str,
    bankroll_id: &str,
) -> Result<BankrollDB> {
    bankrolls::table
        .filter(bankrolls::id.eq(bankroll_id))
        .filter(bankrolls::owner_id.eq(owner_id))
        .select(BankrollDB::as_select())
        .first::<BankrollDB>(conn)
        .optional()
        .into_core()?
        .ok_or_else(|| Error::not_found("Bankroll", bankroll_id))
}

/// Repository for managing bankroll data in the database
pub struct BankrollRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BankrollRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BankrollRepositoryTrait for BankrollRepository {
    async fn create(&self, ctx: &OwnerContext, new_bankroll: NewBankroll) -> Result<Bankroll> {
        let owner_id = ctx.owner_id().to_string();
        self.writer
            .exec(move |conn| {
                let now = chrono::Utc::now().naive_utc();
                let bankroll =
                    new_bankroll.into_bankroll(uuid::Uuid::now_v7().to_string(), &owner_id, now);

                diesel::insert_into(bankrolls::table)
                    .values(BankrollDB::from(&bankroll))
                    .execute(conn)
                    .into_core()?;

                Ok(bankroll)
            })
            .await
    }

    async fn update(&self, ctx: &OwnerContext, update: BankrollUpdate) -> Result<Bankroll> {
        let owner_id = ctx.owner_id().to_string();
        self.writer
            .exec(move |conn| {
                let existing = load_owned_bankroll(conn, &owner_id, &update.id)?;
                let now = chrono::Utc::now().naive_utc();

                diesel::update(
                    bankrolls::table
                        .filter(bankrolls::id.eq(&existing.id))
                        .filter(bankrolls::owner_id.eq(&owner_id)),
                )
                .set((
                    bankrolls::name.eq(update.name.trim()),
                    bankrolls::updated_at.eq(now),
                ))
                .execute(conn)
                .into_core()?;

                Bankroll::try_from(BankrollDB {
                    name: update.name.trim().to_string(),
                    updated_at: now,
                    ..existing
                })
            })
            .await
    }

    async fn delete(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<usize> {
        let owner_id = ctx.owner_id().to_string();
        let bankroll_id = bankroll_id.to_string();
        self.writer
            .exec(move |conn| {
                load_owned_bankroll(conn, &owner_id, &bankroll_id)?;

                // Removed explicitly so the count is known; the foreign key
                // cascade covers the same rows.
                let removed_wagers = diesel::delete(
                    wagers::table
                        .filter(wagers::bankroll_id.eq(&bankroll_id))
                        .filter(wagers::owner_id.eq(&owner_id)),
                )
                .execute(conn)
                .into_core()?;

                diesel::delete(
                    bankrolls::table
                        .filter(bankrolls::id.eq(&bankroll_id))
                        .filter(bankrolls::owner_id.eq(&owner_id)),
                )
                .execute(conn)
                .into_core()?;

                Ok(removed_wagers)
            })
            .await
    }

    fn get_by_id(&self, ctx: &OwnerContext, bankroll_id: &str) -> Result<Bankroll> {
        let mut conn = get_connection(&self.pool)?;
        let row = load_owned_bankroll(&mut conn, ctx.owner_id(), bankroll_id)?;
        Bankroll::try_from(row)
    }

    fn list(&self, ctx: &OwnerContext) -> Result<Vec<Bankroll>> {
        let mut conn = get_connection(&self.pool)?;

        bankrolls::table
            .filter(bankrolls::owner_id.eq(ctx.owner_id()))
            .select(BankrollDB::as_select())
            .order((bankrolls::name.asc(), bankrolls::id.asc()))
            .load::<BankrollDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Bankroll::try_from)
            .collect()
    }
}
