//! Settlement engine: the profit a wager carries for a given outcome.
//!
//! Decimal odds convention: a winning stake returns `stake * odds` in total,
//! so the net gain is `stake * odds - stake`. Arithmetic is exact; nothing
//! here rounds. Results outside the `Decimal` range are a validation error.

use rust_decimal::Decimal;

use super::wagers_model::WagerOutcome;
use crate::{errors::ValidationError, Error, Result};

/// Result of settling a wager.
///
/// An open wager has no profit yet. That is not the same thing as a settled
/// zero, so it gets its own variant instead of `Decimal::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Undetermined,
    Settled(Decimal),
}

impl Settlement {
    /// Profit as persisted on the wager row (`None` while undetermined).
    pub fn profit(&self) -> Option<Decimal> {
        match self {
            Settlement::Undetermined => None,
            Settlement::Settled(profit) => Some(*profit),
        }
    }

    /// Amount this settlement adds to a bankroll balance.
    pub fn contribution(&self) -> Decimal {
        self.profit().unwrap_or(Decimal::ZERO)
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, Settlement::Undetermined)
    }
}

/// Computes the profit of a wager.
///
/// Stake and odds bounds are enforced on the write path, not here. The only
/// failure is a win whose return does not fit in a `Decimal`.
pub fn settle(stake: Decimal, odds: Decimal, outcome: WagerOutcome) -> Result<Settlement> {
    Ok(match outcome {
        WagerOutcome::Open => Settlement::Undetermined,
        WagerOutcome::Won => {
            let profit = gross_return(stake, odds)?
                .checked_sub(stake)
                .ok_or_else(out_of_range)?;
            Settlement::Settled(profit)
        }
        WagerOutcome::Lost => Settlement::Settled(-stake),
    })
}

/// Gross amount returned to the bettor: `stake * odds` on a win, nothing on a
/// loss, `None` while the wager is open.
pub fn payout(stake: Decimal, odds: Decimal, outcome: WagerOutcome) -> Result<Option<Decimal>> {
    Ok(match outcome {
        WagerOutcome::Open => None,
        WagerOutcome::Won => Some(gross_return(stake, odds)?),
        WagerOutcome::Lost => Some(Decimal::ZERO),
    })
}

fn gross_return(stake: Decimal, odds: Decimal) -> Result<Decimal> {
    stake.checked_mul(odds).ok_or_else(out_of_range)
}

fn out_of_range() -> Error {
    Error::Validation(ValidationError::constraint(
        "stake",
        "stake * odds exceeds the supported range",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_won_profit_is_net_of_stake() {
        assert_eq!(
            settle(dec!(100), dec!(2.5), WagerOutcome::Won).unwrap(),
            Settlement::Settled(dec!(150))
        );
        assert_eq!(
            payout(dec!(100), dec!(2.5), WagerOutcome::Won).unwrap(),
            Some(dec!(250))
        );
    }

    #[test]
    fn test_lost_profit_is_negative_stake() {
        assert_eq!(
            settle(dec!(50), dec!(1.8), WagerOutcome::Lost).unwrap(),
            Settlement::Settled(dec!(-50))
        );
        assert_eq!(
            payout(dec!(50), dec!(1.8), WagerOutcome::Lost).unwrap(),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_open_is_undetermined_not_zero() {
        let settlement = settle(dec!(10), dec!(3), WagerOutcome::Open).unwrap();
        assert!(settlement.is_undetermined());
        assert_eq!(settlement.profit(), None);
        assert_eq!(settlement.contribution(), Decimal::ZERO);
        assert_ne!(settlement, Settlement::Settled(Decimal::ZERO));
        assert_eq!(payout(dec!(10), dec!(3), WagerOutcome::Open).unwrap(), None);
    }

    #[test]
    fn test_even_money_win_is_a_settled_zero() {
        // odds of exactly 1.0 return the stake and nothing more
        let settlement = settle(dec!(20), dec!(1), WagerOutcome::Won).unwrap();
        assert_eq!(settlement, Settlement::Settled(Decimal::ZERO));
        assert!(!settlement.is_undetermined());
    }

    #[test]
    fn test_fractional_stakes_stay_exact() {
        assert_eq!(
            settle(dec!(12.35), dec!(1.91), WagerOutcome::Won)
                .unwrap()
                .profit(),
            Some(dec!(11.2385))
        );
    }

    #[test]
    fn test_overflowing_win_is_a_validation_error() {
        let result = settle(Decimal::MAX, dec!(2), WagerOutcome::Won);
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(payout(Decimal::MAX, dec!(2), WagerOutcome::Won).is_err());

        // a loss never multiplies, so the same stake still settles
        assert_eq!(
            settle(Decimal::MAX, dec!(2), WagerOutcome::Lost).unwrap(),
            Settlement::Settled(-Decimal::MAX)
        );
    }
}
