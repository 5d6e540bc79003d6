//! Month arithmetic for monthly price-index periods.
//!
//! A month's rate is booked against the first day of the following month,
//! so range queries work on first-of-month dates.

use chrono::{Datelike, Days, Months, NaiveDate};

/// First day of the month containing `date`.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// First day of the month after the one containing `date`.
///
/// Returns `None` past the end of the calendar.
#[must_use]
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_add_months(Months::new(1))
}

/// First day of the month before the one containing `date`.
#[must_use]
pub fn first_of_previous_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_sub_months(Months::new(1))
}
