//! Monthly inflation record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month-over-month inflation for one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationRecord {
    /// First day of the month following the measured month.
    pub period_date: NaiveDate,
    /// Month-over-month rate (0.05 = 5%).
    pub rate: Decimal,
}

impl InflationRecord {
    /// Creates a new inflation record.
    #[must_use]
    pub const fn new(period_date: NaiveDate, rate: Decimal) -> Self {
        Self { period_date, rate }
    }

    /// Growth multiplier for the period (`1 + rate`).
    #[must_use]
    pub fn growth(&self) -> Option<Decimal> {
        Decimal::ONE.checked_add(self.rate)
    }
}
