//! Monthly inflation series with cumulative range lookups.
//!
//! Records are sorted once at construction; range queries use binary search.
//! The series is read-only after construction and safe to share between
//! threads.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::InflationError;
use super::period::{first_of_next_month, first_of_previous_month};
use super::record::InflationRecord;

/// Ordered month-over-month inflation rates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflationSeries {
    records: Vec<InflationRecord>,
    first_period: NaiveDate,
    today: NaiveDate,
}

impl InflationSeries {
    /// Builds a series, sorting records by period.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no records
    /// - Two records share a period date
    /// - A rate is below -1
    pub fn new(mut records: Vec<InflationRecord>) -> Result<Self, InflationError> {
        records.sort_by_key(|record| record.period_date);

        if let Some(pair) = records
            .windows(2)
            .find(|pair| pair[0].period_date == pair[1].period_date)
        {
            return Err(InflationError::DuplicatePeriod {
                period: pair[0].period_date,
            });
        }

        if let Some(record) = records.iter().find(|record| record.rate < Decimal::NEGATIVE_ONE) {
            return Err(InflationError::RateBelowFloor {
                period: record.period_date,
                rate: record.rate,
            });
        }

        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Err(InflationError::EmptySeries);
        };
        let first_period = first.period_date;
        let today = last.period_date;

        Ok(Self {
            records,
            first_period,
            today,
        })
    }

    /// Records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[InflationRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; an empty series cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Period date of the oldest record.
    #[must_use]
    pub const fn first_period(&self) -> NaiveDate {
        self.first_period
    }

    /// Period date of the newest record: the observation horizon.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Earliest and latest dates a conversion can be computed for.
    ///
    /// The lower bound is the first day of the month measured by the oldest
    /// record.
    #[must_use]
    pub fn observed_range(&self) -> (NaiveDate, NaiveDate) {
        let from = first_of_previous_month(self.first_period).unwrap_or(self.first_period);
        (from, self.today)
    }

    /// Returns true if `date` lies within [`InflationSeries::observed_range`].
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        let (from, to) = self.observed_range();
        date >= from && date <= to
    }

    /// First period whose rate counts for a range starting on `start`.
    ///
    /// The month containing `start` is excluded.
    #[must_use]
    pub fn first_counted_period(start: NaiveDate) -> Option<NaiveDate> {
        first_of_next_month(start)
    }

    /// Records counted for the range `start..=end`.
    #[must_use]
    pub fn select(&self, start: NaiveDate, end: NaiveDate) -> &[InflationRecord] {
        let Some(first_counted) = Self::first_counted_period(start) else {
            return &[];
        };

        let lo = self
            .records
            .partition_point(|record| record.period_date < first_counted);
        let hi = self
            .records
            .partition_point(|record| record.period_date <= end);

        if lo >= hi {
            return &[];
        }
        &self.records[lo..hi]
    }

    /// Product of `1 + rate` over the records counted for `start..=end`.
    ///
    /// An empty selection yields 1.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use valora_core::inflation::{InflationRecord, InflationSeries};
    ///
    /// let d = |y, m| NaiveDate::from_ymd_opt(y, m, 1).unwrap();
    /// let series = InflationSeries::new(vec![
    ///     InflationRecord::new(d(2020, 1), dec!(0.10)),
    ///     InflationRecord::new(d(2020, 2), dec!(0.10)),
    ///     InflationRecord::new(d(2020, 3), dec!(0.10)),
    /// ])
    /// .unwrap();
    ///
    /// // January's own record is excluded
    /// let factor = series.cumulative_factor(d(2020, 1), series.today()).unwrap();
    /// assert_eq!(factor, dec!(1.21));
    /// ```
    pub fn cumulative_factor(&self, start: NaiveDate, end: NaiveDate) -> Result<Decimal, InflationError> {
        self.select(start, end)
            .iter()
            .try_fold(Decimal::ONE, |factor, record| {
                record
                    .growth()
                    .and_then(|growth| factor.checked_mul(growth))
                    .ok_or(InflationError::Overflow {
                        period: record.period_date,
                    })
            })
    }
}
