//! Purchasing-power conversion engine.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ConversionError;
use super::types::{ConversionRequest, ConversionResult, CoveredPeriod, Direction};
use crate::currency::RedenominationTable;
use crate::inflation::InflationSeries;

/// Combines redenominations and cumulative inflation.
///
/// Holds only read-only reference data, so one instance can serve any number
/// of concurrent requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct InflationAdjuster {
    table: RedenominationTable,
    series: InflationSeries,
}

/// Nominal, inflation-only and combined figures.
type Equivalents = (Option<Decimal>, Decimal, Decimal);

/// Intermediate values shared by both directions.
struct Context {
    currency_label: &'static str,
    factor: Decimal,
    zeros_removed: u32,
    today: NaiveDate,
}

impl InflationAdjuster {
    /// Creates an adjuster over the given table and series.
    #[must_use]
    pub const fn new(table: RedenominationTable, series: InflationSeries) -> Self {
        Self { table, series }
    }

    /// Creates an adjuster over the Argentine redenomination table.
    #[must_use]
    pub fn argentine(series: InflationSeries) -> Self {
        Self::new(RedenominationTable::argentine(), series)
    }

    /// Redenomination table in use.
    #[must_use]
    pub const fn table(&self) -> &RedenominationTable {
        &self.table
    }

    /// Inflation series in use.
    #[must_use]
    pub const fn series(&self) -> &InflationSeries {
        &self.series
    }

    /// Observation horizon: the last period of the series.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.series.today()
    }

    /// Converts an amount between `request.date` and today.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is negative
    /// - The date is outside the series' observed range
    /// - Going backwards, the cumulative factor is zero
    /// - A product or quotient leaves the decimal range
    pub fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConversionError> {
        if request.amount < Decimal::ZERO {
            return Err(ConversionError::NegativeAmount(request.amount));
        }

        if !self.series.covers(request.date) {
            let (observed_from, today) = self.series.observed_range();
            return Err(ConversionError::DateOutOfRange {
                date: request.date,
                observed_from,
                today,
            });
        }

        let today = self.series.today();
        let ctx = Context {
            currency_label: self.table.currency_at(request.date),
            factor: self.series.cumulative_factor(request.date, today)?,
            zeros_removed: self.table.zeros_until_present(request.date),
            today,
        };

        let (nominal, inflation_only, combined) = match request.direction {
            Direction::PastToPresent => self.to_present(request, &ctx)?,
            Direction::PresentToPast => self.to_past(request, &ctx)?,
        };

        Ok(ConversionResult {
            amount: request.amount,
            date: request.date,
            direction: request.direction,
            currency_label: ctx.currency_label,
            nominal_equivalent: nominal,
            inflation_only_equivalent: inflation_only,
            combined_equivalent: combined,
            cumulative_factor: ctx.factor,
            zeros_removed: ctx.zeros_removed,
            period_covered: CoveredPeriod {
                from: request.date,
                to: ctx.today,
            },
        })
    }

    /// Shorthand for a `PastToPresent` conversion.
    ///
    /// # Errors
    ///
    /// Same as [`InflationAdjuster::convert`].
    pub fn past_to_present(
        &self,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<ConversionResult, ConversionError> {
        self.convert(&ConversionRequest::past_to_present(amount, date))
    }

    /// Shorthand for a `PresentToPast` conversion.
    ///
    /// # Errors
    ///
    /// Same as [`InflationAdjuster::convert`].
    pub fn present_to_past(
        &self,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<ConversionResult, ConversionError> {
        self.convert(&ConversionRequest::present_to_past(amount, date))
    }

    fn to_present(
        &self,
        request: &ConversionRequest,
        ctx: &Context,
    ) -> Result<Equivalents, ConversionError> {
        let nominal = self.table.scale_to_present(request.amount, request.date)?;
        let inflation_only = request
            .amount
            .checked_mul(ctx.factor)
            .ok_or(ConversionError::Overflow)?;
        let combined = nominal
            .checked_mul(ctx.factor)
            .ok_or(ConversionError::Overflow)?;

        Ok((Some(nominal), inflation_only, combined))
    }

    fn to_past(
        &self,
        request: &ConversionRequest,
        ctx: &Context,
    ) -> Result<Equivalents, ConversionError> {
        if ctx.factor.is_zero() {
            return Err(ConversionError::DivisionUndefined { date: request.date });
        }

        let deflated = request
            .amount
            .checked_div(ctx.factor)
            .ok_or(ConversionError::Overflow)?;
        let historical = self.table.scale_to_past(deflated, request.date)?;

        // Without deflation the old-currency figure can leave the decimal
        // range even when the historical amount does not.
        let nominal = self.table.scale_to_past(request.amount, request.date).ok();

        Ok((nominal, deflated, historical))
    }
}
