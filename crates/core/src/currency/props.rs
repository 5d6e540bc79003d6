//! Property-based tests for redenomination handling.
//!
//! - Round trip: `scale_to_past(scale_to_present(x, d), d) == x`
//! - Rescaling either round-trips exactly or refuses to round
//! - Era lookup agrees with the zero counts

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::CurrencyError;
use super::redenomination::RedenominationTable;

/// Strategy to generate amounts with cents (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate dates between 1900-01-01 and roughly 2030.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..47_500).prop_map(|days| {
        NaiveDate::from_ymd_opt(1900, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(days))
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rescaling to today and back restores the original amount exactly.
    #[test]
    fn prop_round_trip(amount in amount(), date in any_date()) {
        let table = RedenominationTable::argentine();
        let present = table.scale_to_present(amount, date).unwrap();
        let back = table.scale_to_past(present, date).unwrap();
        prop_assert_eq!(back, amount);
    }

    /// Amounts with any number of decimal places never come back altered.
    #[test]
    fn prop_no_silent_rounding(
        mantissa in 1i64..1_000_000_000i64,
        scale in 0u32..=28,
        date in any_date(),
    ) {
        let table = RedenominationTable::argentine();
        let amount = Decimal::new(mantissa, scale);
        match table.scale_to_present(amount, date) {
            Ok(present) => prop_assert_eq!(table.scale_to_past(present, date).unwrap(), amount),
            Err(err) => {
                let is_precision_loss = matches!(err, CurrencyError::PrecisionLoss { .. });
                prop_assert!(is_precision_loss);
            }
        }
    }

    /// Moving forward in time never grows a nominal figure.
    #[test]
    fn prop_scale_to_present_never_grows(amount in amount(), date in any_date()) {
        let table = RedenominationTable::argentine();
        let present = table.scale_to_present(amount, date).unwrap();
        prop_assert!(present <= amount);
    }

    /// Zero counts split the table total at every date.
    #[test]
    fn prop_zero_counts_partition_total(date in any_date()) {
        let table = RedenominationTable::argentine();
        let total: u32 = table.events().iter().map(|e| e.zeros_removed).sum();
        prop_assert_eq!(
            table.zeros_since_origin(date) + table.zeros_until_present(date),
            total
        );
    }

    /// Exactly one era contains any date, and it names the current currency.
    #[test]
    fn prop_single_era_per_date(date in any_date()) {
        let table = RedenominationTable::argentine();
        let matching: Vec<_> = table.eras().into_iter().filter(|era| era.contains(date)).collect();
        prop_assert_eq!(matching.len(), 1);
        prop_assert_eq!(matching[0].name, table.currency_at(date));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_trip_zero() {
        let table = RedenominationTable::argentine();
        let date = NaiveDate::from_ymd_opt(1975, 3, 1).unwrap();
        let present = table.scale_to_present(Decimal::ZERO, date).unwrap();
        assert_eq!(present, Decimal::ZERO);
        assert_eq!(table.scale_to_past(present, date).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_round_trip_small_fraction() {
        let table = RedenominationTable::argentine();
        let date = NaiveDate::from_ymd_opt(1965, 7, 9).unwrap();
        let present = table.scale_to_present(dec!(0.01), date).unwrap();
        assert_eq!(present, dec!(0.000000000000001));
        assert_eq!(table.scale_to_past(present, date).unwrap(), dec!(0.01));
    }
}
