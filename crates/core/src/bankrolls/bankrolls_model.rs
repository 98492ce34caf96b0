//! Bankroll domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a bankroll.
///
/// `current_balance` is derived. Only the ledger reconciler writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bankroll {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Bankroll {
    /// Net result of all settled wagers so far.
    pub fn net_profit(&self) -> Decimal {
        self.current_balance - self.initial_balance
    }
}

/// Input model for creating a new bankroll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBankroll {
    pub name: String,
    pub initial_balance: Decimal,
}

impl NewBankroll {
    /// Validates the new bankroll data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if self.initial_balance < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::constraint(
                "initialBalance",
                "must not be negative",
            )));
        }
        Ok(())
    }

    pub fn into_bankroll(self, id: String, owner_id: &str, now: NaiveDateTime) -> Bankroll {
        Bankroll {
            id,
            owner_id: owner_id.to_string(),
            name: self.name.trim().to_string(),
            initial_balance: self.initial_balance,
            current_balance: self.initial_balance,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input model for renaming a bankroll.
///
/// The initial balance is fixed at creation and the current balance is
/// derived, so the name is the only editable field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankrollUpdate {
    pub id: String,
    pub name: String,
}

impl BankrollUpdate {
    /// Validates the bankroll update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::constraint(
            "name",
            "cannot be empty",
        )));
    }
    Ok(())
}
