//! Conversion error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use valora_shared::AppError;

use crate::currency::CurrencyError;
use crate::inflation::InflationError;

/// Errors raised while converting a single request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Amounts must be zero or positive.
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Results outside the observed inflation range are undefined.
    #[error("Date {date} is outside the observed range {observed_from} to {today}")]
    DateOutOfRange {
        /// Requested date.
        date: NaiveDate,
        /// Earliest date covered by the series.
        observed_from: NaiveDate,
        /// Last period of the series.
        today: NaiveDate,
    },

    /// Cumulative factor is zero, so deflating is undefined.
    #[error("Cumulative inflation factor since {date} is zero; cannot deflate")]
    DivisionUndefined {
        /// Requested date.
        date: NaiveDate,
    },

    /// Result is outside the decimal range.
    #[error("Conversion result overflows the decimal range")]
    Overflow,

    /// Redenomination failure.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Inflation series failure.
    #[error(transparent)]
    Inflation(#[from] InflationError),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::NegativeAmount(_) => Self::Validation(err.to_string()),
            ConversionError::DateOutOfRange { .. }
            | ConversionError::DivisionUndefined { .. }
            | ConversionError::Overflow
            | ConversionError::Currency(_)
            | ConversionError::Inflation(InflationError::Overflow { .. }) => {
                Self::BusinessRule(err.to_string())
            }
            ConversionError::Inflation(_) => Self::Internal(err.to_string()),
        }
    }
}
