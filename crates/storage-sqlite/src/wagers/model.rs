//! Database model for wagers.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::{date_to_column, decimal_to_column, parse_date_column, parse_decimal_column};
use stakebook_core::errors::Error;
use stakebook_core::wagers::{Wager, WagerOutcome};

/// Database model for wagers
///
/// `treat_none_as_null` so that reopening a wager clears its stored profit.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::wagers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct WagerDB {
    pub id: String,
    pub bankroll_id: String,
    pub owner_id: String,
    pub stake: String,
    pub odds: String,
    pub outcome: String,
    pub note: Option<String>,
    pub profit: Option<String>,
    pub settlement_date: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<WagerDB> for Wager {
    type Error = Error;

    fn try_from(db: WagerDB) -> Result<Self, Self::Error> {
        Ok(Self {
            stake: parse_decimal_column(&db.stake, "stake")?,
            odds: parse_decimal_column(&db.odds, "odds")?,
            outcome: db.outcome.parse::<WagerOutcome>()?,
            profit: db
                .profit
                .as_deref()
                .map(|p| parse_decimal_column(p, "profit"))
                .transpose()?,
            settlement_date: parse_date_column(&db.settlement_date, "settlement_date")?,
            id: db.id,
            bankroll_id: db.bankroll_id,
            owner_id: db.owner_id,
            note: db.note,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<&Wager> for WagerDB {
    fn from(domain: &Wager) -> Self {
        Self {
            id: domain.id.clone(),
            bankroll_id: domain.bankroll_id.clone(),
            owner_id: domain.owner_id.clone(),
            stake: decimal_to_column(domain.stake),
            odds: decimal_to_column(domain.odds),
            outcome: domain.outcome.as_str().to_string(),
            note: domain.note.clone(),
            profit: domain.profit.map(decimal_to_column),
            settlement_date: date_to_column(domain.settlement_date),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
