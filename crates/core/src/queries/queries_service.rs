use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use super::queries_model::{DailyStats, HistoryPage, HistoryQuery, OutcomeFilter};
use super::queries_traits::{QueryRepositoryTrait, QueryServiceTrait};
use crate::constants::HISTORY_PAGE_SIZE;
use crate::context::OwnerContext;
use crate::errors::Result;

/// Service answering daily stats and history questions
pub struct QueryService {
    repository: Arc<dyn QueryRepositoryTrait>,
}

impl QueryService {
    pub fn new(repository: Arc<dyn QueryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl QueryServiceTrait for QueryService {
    fn daily_stats(
        &self,
        ctx: &OwnerContext,
        bankroll_id: &str,
        date: NaiveDate,
    ) -> Result<DailyStats> {
        let wagers = self.repository.wagers_on_date(ctx, bankroll_id, date)?;
        DailyStats::from_wagers(date, &wagers)
    }

    fn history_page(
        &self,
        ctx: &OwnerContext,
        bankroll_id: &str,
        filter: OutcomeFilter,
        page: i64,
    ) -> Result<HistoryPage> {
        let query = HistoryQuery::new(bankroll_id)
            .with_filter(filter)
            .with_page(page);
        self.history(ctx, &query)
    }

    fn history(&self, ctx: &OwnerContext, query: &HistoryQuery) -> Result<HistoryPage> {
        query.validate()?;
        debug!(
            "Loading history of bankroll {} (filter {}, page {})",
            query.bankroll_id, query.filter, query.page
        );
        self.repository
            .search_history(ctx, query, HISTORY_PAGE_SIZE)
    }
}
