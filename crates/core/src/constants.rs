use rust_decimal::Decimal;

/// Number of wagers per history page
pub const HISTORY_PAGE_SIZE: i64 = 10;

/// Smallest decimal odds a wager can carry (a win returns the stake only)
pub const MIN_DECIMAL_ODDS: Decimal = Decimal::ONE;

/// Storage and wire format for settlement dates
pub const SETTLEMENT_DATE_FORMAT: &str = "%Y-%m-%d";
