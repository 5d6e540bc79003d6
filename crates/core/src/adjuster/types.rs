//! Conversion request and result types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which way a conversion moves through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Historical amount to today's equivalent.
    PastToPresent,
    /// Today's amount to its historical equivalent.
    PresentToPast,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PastToPresent => write!(f, "past_to_present"),
            Self::PresentToPast => write!(f, "present_to_past"),
        }
    }
}

/// A single conversion to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert.
    pub amount: Decimal,
    /// Historical date of the amount (or of the target, going backwards).
    pub date: NaiveDate,
    /// Conversion direction.
    pub direction: Direction,
}

impl ConversionRequest {
    /// Creates a new conversion request.
    #[must_use]
    pub const fn new(amount: Decimal, date: NaiveDate, direction: Direction) -> Self {
        Self {
            amount,
            date,
            direction,
        }
    }

    /// Historical amount on `date` to today.
    #[must_use]
    pub const fn past_to_present(amount: Decimal, date: NaiveDate) -> Self {
        Self::new(amount, date, Direction::PastToPresent)
    }

    /// Today's amount back to `date`.
    #[must_use]
    pub const fn present_to_past(amount: Decimal, date: NaiveDate) -> Self {
        Self::new(amount, date, Direction::PresentToPast)
    }
}

/// Dates spanned by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoveredPeriod {
    /// Requested date.
    pub from: NaiveDate,
    /// Last period of the series.
    pub to: NaiveDate,
}

/// Outcome of a conversion.
///
/// For `PastToPresent`:
/// - `nominal_equivalent`: zero removal only
/// - `inflation_only_equivalent`: inflation only, in the original denomination
/// - `combined_equivalent`: both, in today's currency
///
/// For `PresentToPast` the same fields hold the inverse quantities, expressed
/// in the currency in circulation on the requested date (except
/// `inflation_only_equivalent`, which stays in today's denomination).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Amount that was converted.
    pub amount: Decimal,
    /// Requested date.
    pub date: NaiveDate,
    /// Conversion direction.
    pub direction: Direction,
    /// Currency in circulation on the requested date.
    pub currency_label: &'static str,
    /// Redenomination effect only; `None` when it leaves the decimal range.
    pub nominal_equivalent: Option<Decimal>,
    /// Inflation effect only.
    pub inflation_only_equivalent: Decimal,
    /// Inflation and redenomination combined.
    pub combined_equivalent: Decimal,
    /// Product of monthly growth over the covered period.
    pub cumulative_factor: Decimal,
    /// Zeros removed between the requested date and today.
    pub zeros_removed: u32,
    /// Dates spanned by the conversion.
    pub period_covered: CoveredPeriod,
}
