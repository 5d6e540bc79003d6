//! Currency error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Redenomination-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Events must have strictly increasing effective dates.
    #[error("Redenomination on {next} is not after the one on {previous}")]
    EventsOutOfOrder {
        /// Effective date of the earlier event in the list.
        previous: NaiveDate,
        /// Effective date of the offending event.
        next: NaiveDate,
    },

    /// The power of ten cannot be represented as a decimal.
    #[error("Cannot rescale by 10^{zeros}: outside the decimal range")]
    ScaleOutOfRange {
        /// Total zeros to remove or restore.
        zeros: u32,
    },

    /// Rescaling the amount left the decimal range.
    #[error("Amount {amount} overflows when rescaled by 10^{zeros}")]
    Overflow {
        /// Amount being rescaled.
        amount: Decimal,
        /// Total zeros to remove or restore.
        zeros: u32,
    },

    /// Rescaling would round away significant digits.
    #[error("Amount {amount} loses precision when divided by 10^{zeros}")]
    PrecisionLoss {
        /// Amount being rescaled.
        amount: Decimal,
        /// Total zeros to remove.
        zeros: u32,
    },
}
