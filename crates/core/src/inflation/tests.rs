//! Property-based tests for the inflation series.

use chrono::{Months, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::record::InflationRecord;
use super::series::InflationSeries;

/// Builds a monthly series starting 1990-01-01 from rates in basis points.
fn series_from_bps(rates_bps: &[i64]) -> InflationSeries {
    let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
    let records = rates_bps
        .iter()
        .enumerate()
        .map(|(i, bps)| {
            let period = start.checked_add_months(Months::new(u32::try_from(i).unwrap())).unwrap();
            InflationRecord::new(period, Decimal::new(*bps, 4))
        })
        .collect();
    InflationSeries::new(records).unwrap()
}

/// Rates from -5% to +30% per month, in basis points.
fn monthly_rates() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-500i64..3000, 1..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Earlier start dates accumulate at least as much inflation when no
    /// month deflates.
    #[test]
    fn prop_factor_monotonic_in_start(
        rates in prop::collection::vec(0i64..3000, 1..120),
        a in 0u32..130,
        b in 0u32..130,
    ) {
        let series = series_from_bps(&rates);
        let base = NaiveDate::from_ymd_opt(1989, 12, 1).unwrap();
        let early = base.checked_add_months(Months::new(a.min(b))).unwrap();
        let late = base.checked_add_months(Months::new(a.max(b))).unwrap();

        let today = series.today();
        let early_factor = series.cumulative_factor(early, today).unwrap();
        let late_factor = series.cumulative_factor(late, today).unwrap();

        prop_assert!(early_factor >= late_factor, "{} < {}", early_factor, late_factor);
    }

    /// Splitting a range at any month multiplies back to the whole factor.
    #[test]
    fn prop_factor_chains(rates in monthly_rates(), split in 0u32..120) {
        let series = series_from_bps(&rates);
        let start = NaiveDate::from_ymd_opt(1989, 12, 1).unwrap();
        let mid = start.checked_add_months(Months::new(split)).unwrap();
        let today = series.today();

        let whole = series.cumulative_factor(start, today).unwrap();
        let head = series.cumulative_factor(start, mid).unwrap();
        let tail = series.cumulative_factor(mid, today).unwrap();

        let diff = (whole - head * tail).abs();
        prop_assert!(diff <= whole * Decimal::new(1, 20), "whole {} head {} tail {}", whole, head, tail);
    }

    /// A range with no counted period is the identity.
    #[test]
    fn prop_same_month_identity(rates in monthly_rates(), offset in 0u32..120) {
        let series = series_from_bps(&rates);
        let date = NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_months(Months::new(offset))
            .unwrap();
        prop_assert_eq!(series.cumulative_factor(date, date).unwrap(), Decimal::ONE);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_constant_rate_compounds() {
        let series = series_from_bps(&[100; 13]);
        let start = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let factor = series.cumulative_factor(start, series.today()).unwrap();
        // 12 counted months at 1%
        let expected = (0..12).fold(Decimal::ONE, |acc, _| acc * Decimal::new(101, 2));
        assert_eq!(factor, expected);
    }
}
