//! Wager domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::settlement::{payout, settle, Settlement};
use crate::constants::{MIN_DECIMAL_ODDS, SETTLEMENT_DATE_FORMAT};
use crate::{errors::ValidationError, Error, Result};

/// Outcome of a wager.
///
/// Transitions are unrestricted: a settled wager can be reopened or settled
/// the other way, and every transition re-settles the wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WagerOutcome {
    #[default]
    Open,
    Won,
    Lost,
}

impl WagerOutcome {
    pub const ALL: [WagerOutcome; 3] = [WagerOutcome::Open, WagerOutcome::Won, WagerOutcome::Lost];

    pub fn as_str(&self) -> &'static str {
        match self {
            WagerOutcome::Open => "open",
            WagerOutcome::Won => "won",
            WagerOutcome::Lost => "lost",
        }
    }

    /// Won and lost wagers count towards the bankroll balance; open ones don't.
    pub fn is_settled(&self) -> bool {
        !matches!(self, WagerOutcome::Open)
    }
}

impl fmt::Display for WagerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WagerOutcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(WagerOutcome::Open),
            "won" => Ok(WagerOutcome::Won),
            "lost" => Ok(WagerOutcome::Lost),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown wager outcome '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing a wager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wager {
    pub id: String,
    pub bankroll_id: String,
    pub owner_id: String,
    pub stake: Decimal,
    pub odds: Decimal,
    pub outcome: WagerOutcome,
    pub note: Option<String>,
    /// Always `settle(stake, odds, outcome).profit()`; `None` while open.
    pub profit: Option<Decimal>,
    pub settlement_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Wager {
    pub fn settlement(&self) -> Result<Settlement> {
        settle(self.stake, self.odds, self.outcome)
    }

    pub fn payout(&self) -> Result<Option<Decimal>> {
        payout(self.stake, self.odds, self.outcome)
    }

    /// Recomputes `profit` from stake, odds and outcome.
    ///
    /// Every write path calls this before persisting, which is what keeps
    /// `profit` from ever being written independently.
    pub fn resettle(&mut self) -> Result<()> {
        self.profit = self.settlement()?.profit();
        Ok(())
    }
}

/// Input model for creating a new wager.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWager {
    pub bankroll_id: String,
    pub stake: Decimal,
    pub odds: Decimal,
    #[serde(default)]
    pub outcome: WagerOutcome,
    pub note: Option<String>,
    pub settlement_date: NaiveDate,
}

impl NewWager {
    /// Validates the new wager data.
    pub fn validate(&self) -> Result<()> {
        if self.bankroll_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "bankrollId".to_string(),
            )));
        }
        validate_stake(self.stake)?;
        validate_odds(self.odds)?;
        Ok(())
    }

    /// Builds the wager row to insert, settled against its initial outcome.
    pub fn into_wager(self, id: String, owner_id: &str, now: NaiveDateTime) -> Result<Wager> {
        let mut wager = Wager {
            id,
            bankroll_id: self.bankroll_id,
            owner_id: owner_id.to_string(),
            stake: self.stake,
            odds: self.odds,
            outcome: self.outcome,
            note: normalize_note(self.note),
            profit: None,
            settlement_date: self.settlement_date,
            created_at: now,
            updated_at: now,
        };
        wager.resettle()?;
        Ok(wager)
    }
}

/// Input model for editing an existing wager.
///
/// Fields left as `None` keep their stored value. A blank `note` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagerUpdate {
    pub id: String,
    pub stake: Option<Decimal>,
    pub odds: Option<Decimal>,
    pub outcome: Option<WagerOutcome>,
    pub note: Option<String>,
    pub settlement_date: Option<NaiveDate>,
}

impl WagerUpdate {
    pub fn outcome_only(id: impl Into<String>, outcome: WagerOutcome) -> Self {
        Self {
            id: id.into(),
            outcome: Some(outcome),
            ..Default::default()
        }
    }

    /// Validates the wager update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if let Some(stake) = self.stake {
            validate_stake(stake)?;
        }
        if let Some(odds) = self.odds {
            validate_odds(odds)?;
        }
        Ok(())
    }

    /// Merges the update into the stored wager and re-settles it.
    ///
    /// Identity, ownership, bankroll and creation time are never changed.
    pub fn apply_to(&self, mut wager: Wager, now: NaiveDateTime) -> Result<Wager> {
        if let Some(stake) = self.stake {
            wager.stake = stake;
        }
        if let Some(odds) = self.odds {
            wager.odds = odds;
        }
        if let Some(outcome) = self.outcome {
            wager.outcome = outcome;
        }
        if let Some(note) = &self.note {
            wager.note = normalize_note(Some(note.clone()));
        }
        if let Some(date) = self.settlement_date {
            wager.settlement_date = date;
        }
        wager.updated_at = now;
        wager.resettle()?;
        Ok(wager)
    }
}

/// Result of any wager write: the wager as committed and the owning
/// bankroll's balance after reconciliation in the same transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagerWriteResult {
    pub wager: Wager,
    pub bankroll_balance: Decimal,
}

pub fn validate_stake(stake: Decimal) -> Result<()> {
    if stake <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::constraint(
            "stake",
            "must be greater than 0",
        )));
    }
    Ok(())
}

pub fn validate_odds(odds: Decimal) -> Result<()> {
    if odds < MIN_DECIMAL_ODDS {
        return Err(Error::Validation(ValidationError::constraint(
            "odds",
            "must be at least 1.0",
        )));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` settlement date.
pub fn parse_settlement_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(
        value.trim(),
        SETTLEMENT_DATE_FORMAT,
    )?)
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}
