//! Ledger domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wagers::{Wager, WagerOutcome};

/// The part of a wager that matters to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub outcome: WagerOutcome,
    pub profit: Option<Decimal>,
}

impl LedgerEntry {
    pub fn new(outcome: WagerOutcome, profit: Option<Decimal>) -> Self {
        Self { outcome, profit }
    }
}

impl From<&Wager> for LedgerEntry {
    fn from(wager: &Wager) -> Self {
        Self::new(wager.outcome, wager.profit)
    }
}

/// Stored versus recomputed balance of a bankroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceCheck {
    pub bankroll_id: String,
    pub stored_balance: Decimal,
    pub computed_balance: Decimal,
    pub drift: Decimal,
    pub consistent: bool,
}

impl BalanceCheck {
    pub fn new(bankroll_id: impl Into<String>, stored: Decimal, computed: Decimal) -> Self {
        Self {
            bankroll_id: bankroll_id.into(),
            stored_balance: stored,
            computed_balance: computed,
            drift: stored.saturating_sub(computed),
            consistent: stored == computed,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.consistent
    }
}
