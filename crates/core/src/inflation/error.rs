//! Inflation series error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Inflation-series errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflationError {
    /// A series needs at least one record to define "today".
    #[error("Inflation series has no records")]
    EmptySeries,

    /// Two records share a period; the month would be counted twice.
    #[error("Duplicate inflation record for period {period}")]
    DuplicatePeriod {
        /// The repeated period date.
        period: NaiveDate,
    },

    /// Rates below -100% would make the cumulative factor negative.
    #[error("Inflation rate {rate} for period {period} is below -1")]
    RateBelowFloor {
        /// Period of the offending record.
        period: NaiveDate,
        /// The offending rate.
        rate: Decimal,
    },

    /// The cumulative product left the decimal range.
    #[error("Cumulative inflation overflows at period {period}")]
    Overflow {
        /// Period at which the product overflowed.
        period: NaiveDate,
    },
}
