//! Query models: daily aggregates and history pagination.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wagers::{Wager, WagerOutcome};
use crate::{errors::ValidationError, Error, Result};

/// Outcome filter for the wager history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeFilter {
    #[default]
    All,
    Won,
    Lost,
    Open,
}

impl OutcomeFilter {
    /// The outcome to match, or `None` for every outcome.
    pub fn outcome(&self) -> Option<WagerOutcome> {
        match self {
            OutcomeFilter::All => None,
            OutcomeFilter::Won => Some(WagerOutcome::Won),
            OutcomeFilter::Lost => Some(WagerOutcome::Lost),
            OutcomeFilter::Open => Some(WagerOutcome::Open),
        }
    }

    pub fn matches(&self, outcome: WagerOutcome) -> bool {
        match self.outcome() {
            Some(expected) => expected == outcome,
            None => true,
        }
    }
}

impl fmt::Display for OutcomeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome() {
            Some(outcome) => write!(f, "{}", outcome),
            None => f.write_str("all"),
        }
    }
}

impl FromStr for OutcomeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(OutcomeFilter::All);
        }
        Ok(match WagerOutcome::from_str(s)? {
            WagerOutcome::Won => OutcomeFilter::Won,
            WagerOutcome::Lost => OutcomeFilter::Lost,
            WagerOutcome::Open => OutcomeFilter::Open,
        })
    }
}

/// Aggregate of one bankroll's wagers settled on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub count: i64,
    pub won_count: i64,
    pub lost_count: i64,
    pub open_count: i64,
    /// Sum of profit over won and lost wagers only.
    pub net_profit: Decimal,
}

impl DailyStats {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            won_count: 0,
            lost_count: 0,
            open_count: 0,
            net_profit: Decimal::ZERO,
        }
    }

    pub fn from_wagers<'a, I>(date: NaiveDate, wagers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Wager>,
    {
        wagers.into_iter().try_fold(Self::empty(date), |mut stats, wager| {
            stats.count += 1;
            match wager.outcome {
                WagerOutcome::Won => stats.won_count += 1,
                WagerOutcome::Lost => stats.lost_count += 1,
                WagerOutcome::Open => stats.open_count += 1,
            }
            if wager.outcome.is_settled() {
                let profit = wager.profit.unwrap_or(Decimal::ZERO);
                stats.net_profit = stats.net_profit.checked_add(profit).ok_or_else(|| {
                    Error::Validation(ValidationError::constraint(
                        "netProfit",
                        "exceeds the supported range",
                    ))
                })?;
            }
            Ok(stats)
        })
    }
}

/// One page of wager history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    pub wagers: Vec<Wager>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub page_count: i64,
}

impl HistoryPage {
    pub fn new(wagers: Vec<Wager>, page: i64, page_size: i64, total: i64) -> Self {
        let page_count = if page_size > 0 {
            (total + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            wagers,
            page,
            page_size,
            total,
            page_count,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Position in a bankroll's history: bankroll, filter and 1-based page.
///
/// Pointing it at another bankroll or filter starts over at page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub bankroll_id: String,
    #[serde(default)]
    pub filter: OutcomeFilter,
    #[serde(default = "first_page")]
    pub page: i64,
}

fn first_page() -> i64 {
    1
}

impl HistoryQuery {
    pub fn new(bankroll_id: impl Into<String>) -> Self {
        Self {
            bankroll_id: bankroll_id.into(),
            filter: OutcomeFilter::All,
            page: 1,
        }
    }

    pub fn with_bankroll(mut self, bankroll_id: impl Into<String>) -> Self {
        let bankroll_id = bankroll_id.into();
        if bankroll_id != self.bankroll_id {
            self.bankroll_id = bankroll_id;
            self.page = 1;
        }
        self
    }

    pub fn with_filter(mut self, filter: OutcomeFilter) -> Self {
        if filter != self.filter {
            self.filter = filter;
            self.page = 1;
        }
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.bankroll_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "bankrollId".to_string(),
            )));
        }
        if self.page < 1 {
            return Err(Error::Validation(ValidationError::constraint(
                "page",
                "must be at least 1",
            )));
        }
        Ok(())
    }

    /// Row offset of this page for a given page size.
    ///
    /// Saturates instead of overflowing, so a page far past the end just
    /// lands beyond the last row.
    pub fn offset(&self, page_size: i64) -> i64 {
        (self.page.max(1) - 1).saturating_mul(page_size.max(0))
    }
}
