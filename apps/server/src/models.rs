//! Request and response bodies that exist only at the HTTP edge.
//!
//! Domain types are returned as is; these cover path-derived ids and query
//! strings the core types don't carry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stakebook_core::wagers::{WagerOutcome, WagerUpdate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameBankroll {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileResponse {
    pub bankroll_id: String,
    pub current_balance: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct StatsParams {
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub outcome: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeChange {
    pub outcome: WagerOutcome,
}

/// Partial wager edit; the id comes from the path.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagerPatch {
    pub stake: Option<Decimal>,
    pub odds: Option<Decimal>,
    pub outcome: Option<WagerOutcome>,
    pub note: Option<String>,
    pub settlement_date: Option<NaiveDate>,
}

impl WagerPatch {
    pub fn into_update(self, id: String) -> WagerUpdate {
        WagerUpdate {
            id,
            stake: self.stake,
            odds: self.odds,
            outcome: self.outcome,
            note: self.note,
            settlement_date: self.settlement_date,
        }
    }
}
