//! Period date parsing.
//!
//! Dataset dates come as `dd/mm/yyyy` or `mm/dd/yyyy`; the configured order
//! is tried first and the other one as a fallback. ISO `yyyy-mm-dd` is
//! accepted as well.

use chrono::NaiveDate;
use valora_shared::DateOrder;

const DAY_FIRST: &str = "%d/%m/%Y";
const MONTH_FIRST: &str = "%m/%d/%Y";
const ISO: &str = "%Y-%m-%d";

/// Parses a dataset date, returning `None` if no format matches.
#[must_use]
pub fn parse_period_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let raw = raw.trim();

    if raw.contains('-') {
        return NaiveDate::parse_from_str(raw, ISO).ok();
    }

    let parts: Vec<&str> = raw.split('/').collect();
    let well_formed = parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        && parts[2].len() == 4;
    if !well_formed {
        return None;
    }

    let formats = match order {
        DateOrder::DayFirst => [DAY_FIRST, MONTH_FIRST],
        DateOrder::MonthFirst => [MONTH_FIRST, DAY_FIRST],
    };

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
