//! Property-based tests for settlement and balance aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use stakebook_core::ledger::{compute_current_balance, LedgerEntry};
use stakebook_core::queries::DailyStats;
use stakebook_core::wagers::{payout, settle, NewWager, Settlement, WagerOutcome};

// =============================================================================
// Generators
// =============================================================================

fn arb_outcome() -> impl Strategy<Value = WagerOutcome> {
    prop_oneof![
        Just(WagerOutcome::Open),
        Just(WagerOutcome::Won),
        Just(WagerOutcome::Lost),
    ]
}

/// Stakes with cent precision, 0.01 to 10000.00.
fn arb_stake() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Decimal odds with two places, 1.00 to 50.00.
fn arb_odds() -> impl Strategy<Value = Decimal> {
    (100i64..=5_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn arb_wager() -> impl Strategy<Value = NewWager> {
    (arb_stake(), arb_odds(), arb_outcome()).prop_map(|(stake, odds, outcome)| NewWager {
        bankroll_id: "b-1".to_string(),
        stake,
        odds,
        outcome,
        note: None,
        settlement_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_won_profit_is_payout_minus_stake(stake in arb_stake(), odds in arb_odds()) {
        let profit = settle(stake, odds, WagerOutcome::Won).unwrap().profit().unwrap();
        prop_assert_eq!(profit, stake * odds - stake);
        prop_assert_eq!(Some(profit + stake), payout(stake, odds, WagerOutcome::Won).unwrap());
        prop_assert!(profit >= Decimal::ZERO);
    }

    #[test]
    fn prop_lost_profit_is_negative_stake(stake in arb_stake(), odds in arb_odds()) {
        prop_assert_eq!(settle(stake, odds, WagerOutcome::Lost).unwrap(), Settlement::Settled(-stake));
    }

    #[test]
    fn prop_open_is_always_undetermined(stake in arb_stake(), odds in arb_odds()) {
        prop_assert!(settle(stake, odds, WagerOutcome::Open).unwrap().is_undetermined());
    }

    #[test]
    fn prop_balance_is_initial_plus_settled_profit(
        initial in (0i64..=10_000_000).prop_map(|c| Decimal::new(c, 2)),
        wagers in proptest::collection::vec(arb_wager(), 0..40),
    ) {
        let now = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let wagers: Vec<_> = wagers
            .into_iter()
            .enumerate()
            .map(|(i, w)| w.into_wager(format!("w-{}", i), "alice", now).unwrap())
            .collect();

        let expected = initial
            + wagers
                .iter()
                .filter(|w| w.outcome.is_settled())
                .map(|w| settle(w.stake, w.odds, w.outcome).unwrap().contribution())
                .sum::<Decimal>();
        let balance = compute_current_balance(initial, wagers.iter().map(LedgerEntry::from)).unwrap();
        prop_assert_eq!(balance, expected);

        // the daily net of a single-day ledger is the balance movement
        let stats = DailyStats::from_wagers(now.date(), &wagers).unwrap();
        prop_assert_eq!(stats.net_profit, balance - initial);
        prop_assert_eq!(stats.won_count + stats.lost_count + stats.open_count, stats.count);
    }
}
