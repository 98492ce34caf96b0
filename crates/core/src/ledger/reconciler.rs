//! Balance aggregation shared by every store implementation.

use rust_decimal::Decimal;

use super::ledger_model::LedgerEntry;
use crate::{errors::ValidationError, Error, Result};

/// `initial_balance` plus the profit of every settled entry.
///
/// Open entries are skipped on their outcome, not on their profit, so a
/// stray profit left on an open row can never leak into the balance. A sum
/// outside the `Decimal` range is a validation error.
pub fn compute_current_balance<I>(initial_balance: Decimal, entries: I) -> Result<Decimal>
where
    I: IntoIterator<Item = LedgerEntry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.outcome.is_settled())
        .filter_map(|entry| entry.profit)
        .try_fold(initial_balance, |balance, profit| {
            balance.checked_add(profit).ok_or_else(|| {
                Error::Validation(ValidationError::constraint(
                    "currentBalance",
                    "exceeds the supported range",
                ))
            })
        })
}
