//! Nominal conversion across redenominations.
//!
//! Only the zero-removal effect is applied here: no inflation, no rounding.
//! Both directions use exact powers of ten so that
//! `scale_to_past(scale_to_present(x, d), d) == x` holds without drift for
//! amounts that fit in a decimal after rescaling.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::CurrencyError;
use super::redenomination::RedenominationTable;

/// Returns `10^zeros` as a decimal, if representable.
fn power_of_ten(zeros: u32) -> Result<Decimal, CurrencyError> {
    10i128
        .checked_pow(zeros)
        .and_then(|power| Decimal::try_from_i128_with_scale(power, 0).ok())
        .ok_or(CurrencyError::ScaleOutOfRange { zeros })
}

impl RedenominationTable {
    /// Expresses an amount held on `date` in today's currency.
    ///
    /// Divides by `10^zeros_removed` for every event after `date`. Fails
    /// rather than rounding when the quotient needs more than 28 decimal
    /// places.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use valora_core::currency::RedenominationTable;
    ///
    /// let table = RedenominationTable::argentine();
    /// let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
    /// let today = table.scale_to_present(dec!(10000000000000), date).unwrap();
    /// assert_eq!(today, dec!(1));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Overflow` or `PrecisionLoss` when the quotient cannot be
    /// represented exactly.
    pub fn scale_to_present(&self, amount: Decimal, date: NaiveDate) -> Result<Decimal, CurrencyError> {
        let zeros = self.zeros_until_present(date);
        if zeros == 0 {
            return Ok(amount);
        }

        let divisor = power_of_ten(zeros)?;
        let scaled = amount
            .checked_div(divisor)
            .ok_or(CurrencyError::Overflow { amount, zeros })?;

        // Quotients past the 28th decimal place are rounded silently.
        if scaled.checked_mul(divisor) != Some(amount) {
            return Err(CurrencyError::PrecisionLoss { amount, zeros });
        }

        Ok(scaled)
    }

    /// Expresses an amount in today's currency in the currency of `date`.
    ///
    /// Inverse of [`RedenominationTable::scale_to_present`].
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the product leaves the decimal range.
    pub fn scale_to_past(&self, amount: Decimal, date: NaiveDate) -> Result<Decimal, CurrencyError> {
        let zeros = self.zeros_until_present(date);
        if zeros == 0 {
            return Ok(amount);
        }

        let multiplier = power_of_ten(zeros)?;
        amount
            .checked_mul(multiplier)
            .ok_or(CurrencyError::Overflow { amount, zeros })
    }
}
