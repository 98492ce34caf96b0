//! Query repository and service traits.

use chrono::NaiveDate;

use super::queries_model::{DailyStats, HistoryPage, HistoryQuery, OutcomeFilter};
use crate::context::OwnerContext;
use crate::errors::Result;
use crate::wagers::Wager;

/// Read-side access to wagers.
///
/// Both methods fail with `Error::NotFound` when the bankroll does not belong
/// to the acting owner. An empty result is never an error.
pub trait QueryRepositoryTrait: Send + Sync {
    /// Wagers of a bankroll with the given settlement date.
    fn wagers_on_date(
        &self,
        ctx: &OwnerContext,
        bankroll_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<Wager>>;

    /// One page of history, newest settlement date first.
    fn search_history(
        &self,
        ctx: &OwnerContext,
        query: &HistoryQuery,
        page_size: i64,
    ) -> Result<HistoryPage>;
}

pub trait QueryServiceTrait: Send + Sync {
    fn daily_stats(
        &self,
        ctx: &OwnerContext,
        bankroll_id: &str,
        date: NaiveDate,
    ) -> Result<DailyStats>;

    fn history_page(
        &self,
        ctx: &OwnerContext,
        bankroll_id: &str,
        filter: OutcomeFilter,
        page: i64,
    ) -> Result<HistoryPage>;

    fn history(&self, ctx: &OwnerContext, query: &HistoryQuery) -> Result<HistoryPage>;
}
