//! Read-side queries over committed wagers.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use std::sync::Arc;

use crate::bankrolls::load_owned_bankroll;
use crate::db::{get_connection, DbPool};
use crate::errors::{IntoCore, StorageError};
use crate::schema::wagers;
use crate::utils::date_to_column;
use crate::wagers::WagerDB;
use stakebook_core::context::OwnerContext;
use stakebook_core::errors::{Error, Result};
use stakebook_core::queries::{HistoryPage, HistoryQuery, QueryRepositoryTrait};
use stakebook_core::wagers::Wager;

fn owned_wagers<'a>(
    owner_id: &'a str,
    bankroll_id: &'a str,
    outcome: Option<&'a str>,
) -> wagers::BoxedQuery<'a, Sqlite> {
    let mut query = wagers::table
        .filter(wagers::owner_id.eq(owner_id))
        .filter(wagers::bankroll_id.eq(bankroll_id))
        .into_boxed();
    if let Some(outcome) = outcome {
        query = query.filter(wagers::outcome.eq(outcome));
    }
    query
}

/// Reads only; uses pooled connections and never the writer.
pub struct QueryRepository {
    pool: Arc<DbPool>,
}

impl QueryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl QueryRepositoryTrait for QueryRepository {
    fn wagers_on_date(
        &self,
        ctx: &OwnerContext,
        bankroll_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Wager>> {
        let mut conn = get_connection(&self.pool)?;
        let owner_id = ctx.owner_id();
        load_owned_bankroll(&mut conn, owner_id, bankroll_id)?;

        wagers::table
            .filter(wagers::owner_id.eq(owner_id))
            .filter(wagers::bankroll_id.eq(bankroll_id))
            .filter(wagers::settlement_date.eq(date_to_column(date)))
            .select(WagerDB::as_select())
            .order((wagers::created_at.desc(), wagers::id.desc()))
            .load::<WagerDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Wager::try_from)
            .collect()
    }

    fn search_history(
        &self,
        ctx: &OwnerContext,
        query: &HistoryQuery,
        page_size: i64,
    ) -> Result<HistoryPage> {
        let mut conn = get_connection(&self.pool)?;
        let owner_id = ctx.owner_id();

        // Count and page in one read transaction so total matches the rows.
        conn.transaction::<_, StorageError, _>(|conn| {
            load_owned_bankroll(conn, owner_id, &query.bankroll_id)?;

            let outcome = query.filter.outcome().map(|o| o.as_str());
            let total: i64 = owned_wagers(owner_id, &query.bankroll_id, outcome)
                .count()
                .get_result(conn)?;

            let rows = owned_wagers(owner_id, &query.bankroll_id, outcome)
                .select(WagerDB::as_select())
                .order((
                    wagers::settlement_date.desc(),
                    wagers::created_at.desc(),
                    wagers::id.desc(),
                ))
                .limit(page_size)
                .offset(query.offset(page_size))
                .load::<WagerDB>(conn)?;

            let items = rows
                .into_iter()
                .map(Wager::try_from)
                .collect::<Result<Vec<_>>>()?;

            Ok(HistoryPage::new(items, query.page, page_size, total))
        })
        .map_err(Error::from)
    }
}
