//! Column codecs for values SQLite has no native type for.
//!
//! Money is stored as TEXT so that it round-trips exactly. A value that no
//! longer parses is reported as a storage error rather than defaulted, since
//! a silently zeroed amount would corrupt every balance derived from it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use stakebook_core::constants::SETTLEMENT_DATE_FORMAT;
use stakebook_core::Result;

pub fn decimal_to_column(value: Decimal) -> String {
    value.to_string()
}

pub fn parse_decimal_column(value: &str, column: &str) -> Result<Decimal> {
    Decimal::from_str(value).map_err(|e| {
        StorageError::SerializationError(format!(
            "Invalid decimal in column {} ('{}'): {}",
            column, value, e
        ))
        .into()
    })
}

pub fn date_to_column(date: NaiveDate) -> String {
    date.format(SETTLEMENT_DATE_FORMAT).to_string()
}

pub fn parse_date_column(value: &str, column: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, SETTLEMENT_DATE_FORMAT).map_err(|e| {
        StorageError::SerializationError(format!(
            "Invalid date in column {} ('{}'): {}",
            column, value, e
        ))
        .into()
    })
}
