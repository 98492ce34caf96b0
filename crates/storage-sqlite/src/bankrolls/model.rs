//! Database model for bankrolls.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::{decimal_to_column, parse_decimal_column};
use stakebook_core::bankrolls::Bankroll;
use stakebook_core::errors::Error;

/// Database model for bankrolls
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::bankrolls)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BankrollDB {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub initial_balance: String,
    pub current_balance: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<BankrollDB> for Bankroll {
    type Error = Error;

    fn try_from(db: BankrollDB) -> Result<Self, Self::Error> {
        Ok(Self {
            initial_balance: parse_decimal_column(&db.initial_balance, "initial_balance")?,
            current_balance: parse_decimal_column(&db.current_balance, "current_balance")?,
            id: db.id,
            owner_id: db.owner_id,
            name: db.name,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<&Bankroll> for BankrollDB {
    fn from(domain: &Bankroll) -> Self {
        Self {
            id: domain.id.clone(),
            owner_id: domain.owner_id.clone(),
            name: domain.name.clone(),
            initial_balance: decimal_to_column(domain.initial_balance),
            current_balance: decimal_to_column(domain.current_balance),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
